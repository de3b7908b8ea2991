//! Configuration loaded from `.aurora-risk.toml`.
//!
//! Only presentation and execution settings are configurable. Scoring
//! points, classification thresholds and impact statements are fixed.

mod core;
mod loader;

pub use self::core::{AnalysisSettings, AuroraConfig, OutputConfig};
pub use loader::{
    default_config_template, directory_ancestors, discover_config, load_config,
    load_config_from, parse_config, resolve_config, CONFIG_FILE_NAME,
};
