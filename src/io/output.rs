use crate::core::{AggregateAssessment, ManualFeatureSet, RiskAssessment};
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::scoring::ImageReport;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

/// One image of a visual batch, labelled with where it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEntry {
    pub source: String,
    #[serde(flatten)]
    pub report: ImageReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualReport {
    pub images: Vec<ImageEntry>,
    pub aggregate: AggregateAssessment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualReport {
    pub features: ManualFeatureSet,
    pub assessment: RiskAssessment,
    pub interpretation: String,
}

pub trait OutputWriter {
    fn write_visual(&mut self, report: &VisualReport) -> anyhow::Result<()>;
    fn write_manual(&mut self, report: &ManualReport) -> anyhow::Result<()>;
}

/// Build a writer for `format`. `verbose` adds per-image measurements to
/// human-readable formats; JSON always carries them.
pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    verbose: bool,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer).with_verbose(verbose)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer).with_verbose(verbose)),
    }
}
