use crate::core::RiskLevel;
use crate::io::output::{ManualReport, OutputWriter, VisualReport};
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
    verbose: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer, "{}", title.bold().cyan())?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn image_table(&self, report: &VisualReport) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut header = vec!["#", "Source", "Brightness", "Colors", "Extent"];
        if self.verbose {
            header.extend(["Mean Gray", "Color Std", "Lit Ratio"]);
        }
        header.extend(["Score", "Level"]);
        table.set_header(header);

        for (index, entry) in report.images.iter().enumerate() {
            let r = &entry.report;
            let mut row = vec![
                (index + 1).to_string(),
                entry.source.clone(),
                r.features.brightness.to_string(),
                r.features.color_variety.to_string(),
                r.features.spatial_extent.to_string(),
            ];
            if self.verbose {
                row.push(format!("{:.1}", r.statistics.mean_brightness));
                row.push(format!("{:.1}", r.statistics.color_std));
                row.push(format!("{:.3}", r.statistics.lit_ratio));
            }
            row.push(r.risk.score.to_string());
            row.push(r.risk.level.to_string());
            table.add_row(row);
        }
        table
    }
}

fn colored_level(level: RiskLevel) -> ColoredString {
    let label = format!("{level} RISK");
    match level {
        RiskLevel::High => label.red().bold(),
        RiskLevel::Moderate => label.yellow().bold(),
        RiskLevel::Low => label.green().bold(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_visual(&mut self, report: &VisualReport) -> anyhow::Result<()> {
        self.write_header("        AURORA VISUAL RISK ANALYSIS")?;

        let table = self.image_table(report);
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;

        let aggregate = &report.aggregate;
        let scores: Vec<String> = aggregate
            .per_image_scores
            .iter()
            .map(|s| s.to_string())
            .collect();
        let levels: Vec<&str> = aggregate
            .per_image_levels
            .iter()
            .map(|l| l.as_str())
            .collect();

        writeln!(self.writer, "Per-image scores: [{}]", scores.join(", "))?;
        writeln!(self.writer, "Per-image levels: [{}]", levels.join(", "))?;
        writeln!(self.writer, "Mean risk score: {:.2}", aggregate.display_mean())?;
        writeln!(
            self.writer,
            "{} {}",
            "RESULT:".bold(),
            colored_level(aggregate.final_level)
        )?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_manual(&mut self, report: &ManualReport) -> anyhow::Result<()> {
        self.write_header("     AURORA OBSERVATION RISK ANALYSIS")?;

        let features = &report.features;
        writeln!(
            self.writer,
            "Observation: brightness={}, color={}, extent={}, temporal={}",
            features.brightness,
            features.color_variety,
            features.spatial_extent,
            features.temporal_behavior
        )?;
        writeln!(self.writer)?;

        let assessment = &report.assessment;
        writeln!(
            self.writer,
            "{} {}",
            "Risk level:".bold(),
            colored_level(assessment.level)
        )?;
        writeln!(self.writer, "{} {}", "Risk score:".bold(), assessment.score)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "Possible impacts:".bold())?;
        for impact in &assessment.impacts {
            writeln!(self.writer, "  - {impact}")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "Interpretation:".bold())?;
        writeln!(self.writer, "  {}", report.interpretation)?;
        self.writer.flush()?;
        Ok(())
    }
}
