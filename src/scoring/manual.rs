use super::ClassificationThresholds;
use crate::core::{ManualFeatureSet, RiskAssessment, RiskLevel};

const HIGH_IMPACTS: &[&str] = &[
    "GNSS signal degradation likely",
    "HF communication disruption possible",
    "Scientific measurements may be unreliable",
];

const MODERATE_IMPACTS: &[&str] = &[
    "Minor GNSS inaccuracies possible",
    "Communication disturbances unlikely but possible",
];

const LOW_IMPACTS: &[&str] = &["No significant operational risk expected"];

/// Operational impact statements tied to a manual-mode level.
pub fn impacts_for(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::High => HIGH_IMPACTS,
        RiskLevel::Moderate => MODERATE_IMPACTS,
        RiskLevel::Low => LOW_IMPACTS,
    }
}

#[derive(Debug, Default)]
pub struct ManualRiskScorer;

impl ManualRiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_score(&self, features: &ManualFeatureSet) -> u32 {
        features.brightness.points()
            + features.color_variety.points()
            + features.spatial_extent.points()
            + features.temporal_behavior.points()
    }

    pub fn score(&self, features: &ManualFeatureSet) -> RiskAssessment {
        let score = self.calculate_score(features);
        let level = ClassificationThresholds::MANUAL.classify(f64::from(score));

        tracing::debug!(score, level = %level, "Scored manual observation");

        RiskAssessment {
            score,
            level,
            impacts: impacts_for(level).iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub fn score_manual(features: &ManualFeatureSet) -> RiskAssessment {
    ManualRiskScorer::new().score(features)
}
