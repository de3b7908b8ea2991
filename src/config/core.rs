use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure, read from `.aurora-risk.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuroraConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Batch analysis settings
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Report format used when `--format` is not given
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Extract features for batch images in parallel
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Worker threads for parallel extraction, 0 = all cores
    #[serde(default)]
    pub jobs: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            jobs: 0,
        }
    }
}

fn default_parallel() -> bool {
    true
}
