//! Additive risk scoring for visual and manual observations.
//!
//! Both scorers sum fixed per-feature points and classify the total with
//! their own threshold pair. The pairs are tuned for different score ranges
//! (visual 3-8, manual 4-12) and are kept separate.

pub mod manual;
pub mod visual;

pub use manual::{impacts_for, score_manual, ManualRiskScorer};
pub use visual::{score_visual_batch, ImageReport, VisualRiskScorer};

use crate::core::RiskLevel;
use serde::{Deserialize, Serialize};

/// Inclusive lower bounds for HIGH and MODERATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    pub high: u32,
    pub moderate: u32,
}

impl ClassificationThresholds {
    pub const VISUAL: Self = Self {
        high: 7,
        moderate: 5,
    };

    pub const MANUAL: Self = Self {
        high: 9,
        moderate: 6,
    };

    /// Classify a score. Fractional scores (batch means) are compared
    /// unrounded.
    pub fn classify(&self, score: f64) -> RiskLevel {
        if score >= f64::from(self.high) {
            RiskLevel::High
        } else if score >= f64::from(self.moderate) {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn visual_boundaries() {
        let t = ClassificationThresholds::VISUAL;
        assert_eq!(t.classify(4.0), RiskLevel::Low);
        assert_eq!(t.classify(4.99), RiskLevel::Low);
        assert_eq!(t.classify(5.0), RiskLevel::Moderate);
        assert_eq!(t.classify(6.99), RiskLevel::Moderate);
        assert_eq!(t.classify(7.0), RiskLevel::High);
    }

    #[test]
    fn manual_boundaries() {
        let t = ClassificationThresholds::MANUAL;
        assert_eq!(t.classify(5.0), RiskLevel::Low);
        assert_eq!(t.classify(6.0), RiskLevel::Moderate);
        assert_eq!(t.classify(8.0), RiskLevel::Moderate);
        assert_eq!(t.classify(9.0), RiskLevel::High);
    }

    proptest! {
        #[test]
        fn classification_is_monotonic(a in 0.0..15.0f64, b in 0.0..15.0f64) {
            for t in [ClassificationThresholds::VISUAL, ClassificationThresholds::MANUAL] {
                if a <= b {
                    prop_assert!(t.classify(a) <= t.classify(b));
                }
            }
        }
    }
}
