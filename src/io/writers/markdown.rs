use crate::io::output::{ManualReport, OutputWriter, VisualReport};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
    verbose: bool,
}

impl<W: Write> MarkdownWriter<W> {
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

    fn write_image_table(&mut self, report: &VisualReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Per-Image Results")?;
        writeln!(self.writer)?;

        if self.verbose {
            writeln!(
                self.writer,
                "| # | Source | Brightness | Colors | Extent | Mean Gray | Color Std | Lit Ratio | Score | Level |"
            )?;
            writeln!(
                self.writer,
                "|---|--------|------------|--------|--------|-----------|-----------|-----------|-------|-------|"
            )?;
        } else {
            writeln!(
                self.writer,
                "| # | Source | Brightness | Colors | Extent | Score | Level |"
            )?;
            writeln!(
                self.writer,
                "|---|--------|------------|--------|--------|-------|-------|"
            )?;
        }

        for (index, entry) in report.images.iter().enumerate() {
            let r = &entry.report;
            if self.verbose {
                writeln!(
                    self.writer,
                    "| {} | {} | {} | {} | {} | {:.1} | {:.1} | {:.3} | {} | {} |",
                    index + 1,
                    entry.source,
                    r.features.brightness,
                    r.features.color_variety,
                    r.features.spatial_extent,
                    r.statistics.mean_brightness,
                    r.statistics.color_std,
                    r.statistics.lit_ratio,
                    r.risk.score,
                    r.risk.level
                )?;
            } else {
                writeln!(
                    self.writer,
                    "| {} | {} | {} | {} | {} | {} | {} |",
                    index + 1,
                    entry.source,
                    r.features.brightness,
                    r.features.color_variety,
                    r.features.spatial_extent,
                    r.risk.score,
                    r.risk.level
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_visual(&mut self, report: &VisualReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Aurora Visual Risk Report")?;
        writeln!(self.writer)?;
        self.write_image_table(report)?;

        let aggregate = &report.aggregate;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Images analyzed: {}", aggregate.image_count())?;
        writeln!(self.writer, "- Mean risk score: {:.2}", aggregate.display_mean())?;
        writeln!(self.writer, "- **Final risk level: {}**", aggregate.final_level)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_manual(&mut self, report: &ManualReport) -> anyhow::Result<()> {
        let features = &report.features;
        let assessment = &report.assessment;

        writeln!(self.writer, "# Aurora Observation Risk Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Descriptor | Value | Points |")?;
        writeln!(self.writer, "|------------|-------|--------|")?;
        writeln!(
            self.writer,
            "| Brightness | {} | {} |",
            features.brightness,
            features.brightness.points()
        )?;
        writeln!(
            self.writer,
            "| Color variety | {} | {} |",
            features.color_variety,
            features.color_variety.points()
        )?;
        writeln!(
            self.writer,
            "| Spatial extent | {} | {} |",
            features.spatial_extent,
            features.spatial_extent.points()
        )?;
        writeln!(
            self.writer,
            "| Temporal behavior | {} | {} |",
            features.temporal_behavior,
            features.temporal_behavior.points()
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Risk level: {}** (score {})",
            assessment.level, assessment.score
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Possible Impacts")?;
        writeln!(self.writer)?;
        for impact in &assessment.impacts {
            writeln!(self.writer, "- {impact}")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "## Interpretation")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", report.interpretation)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::writers::test_fixtures::{manual_report, visual_report};

    fn render_visual(verbose: bool) -> String {
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf)
            .with_verbose(verbose)
            .write_visual(&visual_report())
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn visual_summary_rounds_mean() {
        let out = render_visual(false);
        assert!(out.contains("| 1 | faint.png | low | single | narrow | 3 | LOW |"));
        assert!(out.contains("| 2 | storm.jpg | high | multiple | wide | 8 | HIGH |"));
        assert!(out.contains("- Mean risk score: 5.50"));
        assert!(out.contains("**Final risk level: MODERATE**"));
        assert!(!out.contains("Lit Ratio"));
    }

    #[test]
    fn verbose_visual_includes_statistics() {
        let out = render_visual(true);
        assert!(out.contains("Lit Ratio"));
        assert!(out.contains("| 171.0 | 55.5 | 0.800 |"));
    }

    #[test]
    fn manual_lists_impacts_and_interpretation() {
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf)
            .write_manual(&manual_report())
            .unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains("| Temporal behavior | burst | 3 |"));
        assert!(out.contains("**Risk level: HIGH** (score 11)"));
        assert!(out.contains("- GNSS signal degradation likely"));
        assert!(out.contains("- Scientific measurements may be unreliable"));
        assert!(out.contains("## Interpretation"));
    }
}
