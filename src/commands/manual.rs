use crate::core::ManualFeatureSet;
use crate::interpretation::interpret;
use crate::io::{self, ManualReport, OutputFormat};
use crate::observability::{set_phase, AnalysisPhase};
use crate::scoring::ManualRiskScorer;
use anyhow::Result;
use std::path::PathBuf;

pub struct ManualConfig {
    pub features: ManualFeatureSet,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn build_manual_report(features: ManualFeatureSet) -> ManualReport {
    let _phase = set_phase(AnalysisPhase::Scoring);
    let assessment = ManualRiskScorer::new().score(&features);
    let interpretation = interpret(assessment.level).to_string();

    ManualReport {
        features,
        assessment,
        interpretation,
    }
}

pub fn handle_manual(config: ManualConfig) -> Result<()> {
    let report = build_manual_report(config.features);

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    let destination = io::open_destination(config.output.as_deref())?;
    let mut writer = io::create_writer(config.format, destination, false);
    writer.write_manual(&report)?;
    Ok(())
}
