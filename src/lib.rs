//! Aurora observation risk classification.
//!
//! Two pipelines share the same shape (features, score, classify, report):
//!
//! - **visual**: [`extraction`] turns a photograph into brightness, color
//!   variety and spatial extent; [`scoring::visual`] scores each image and
//!   classifies the batch mean
//! - **manual**: [`scoring::manual`] scores four observer-reported
//!   descriptors and attaches operational impact statements;
//!   [`interpretation`] supplies the narrative
//!
//! ```
//! use aurora_risk::{interpret, score_manual, ManualFeatureSet, RiskLevel};
//!
//! let features = ManualFeatureSet::from_labels("high", "multiple", "wide", "burst")?;
//! let assessment = score_manual(&features);
//! assert_eq!(assessment.score, 11);
//! assert_eq!(assessment.level, RiskLevel::High);
//! assert!(!interpret(assessment.level).is_empty());
//! # Ok::<(), aurora_risk::Error>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod extraction;
pub mod interpretation;
pub mod io;
pub mod observability;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AggregateAssessment, Brightness, ColorVariety, Error, ImageRisk, ManualFeatureSet, Result,
    RiskAssessment, RiskLevel, SpatialExtent, TemporalBehavior, VisualFeatureSet,
};

pub use crate::extraction::{extract, extract_features, Image, ImageStatistics};

pub use crate::scoring::{
    score_manual, score_visual_batch, ClassificationThresholds, ImageReport, ManualRiskScorer,
    VisualRiskScorer,
};

pub use crate::interpretation::interpret;

pub use crate::config::{load_config, AuroraConfig};

pub use crate::io::{create_writer, OutputFormat, OutputWriter};
