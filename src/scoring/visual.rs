use super::ClassificationThresholds;
use crate::core::{AggregateAssessment, Error, ImageRisk, Result, VisualFeatureSet};
use crate::extraction::{self, Image, ImageStatistics};
use crate::observability::{in_image_context, set_phase, AnalysisPhase};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Everything known about one scored image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageReport {
    pub features: VisualFeatureSet,
    pub statistics: ImageStatistics,
    pub risk: ImageRisk,
}

pub struct VisualRiskScorer {
    /// Extract features for batch members on the rayon pool
    pub parallel: bool,
}

impl Default for VisualRiskScorer {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl VisualRiskScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn score_one(&self, features: &VisualFeatureSet) -> ImageRisk {
        let score = features.brightness.points()
            + features.color_variety.points()
            + features.spatial_extent.points();

        ImageRisk {
            score,
            level: ClassificationThresholds::VISUAL.classify(f64::from(score)),
        }
    }

    pub fn assess_image(&self, image: &Image) -> ImageReport {
        let (features, statistics) = extraction::analyze(image);
        ImageReport {
            features,
            statistics,
            risk: self.score_one(&features),
        }
    }

    /// Assess each image independently. Output order matches input order.
    pub fn assess_images(&self, images: &[Image]) -> Vec<ImageReport> {
        let assess = |(index, image): (usize, &Image)| {
            in_image_context(AnalysisPhase::FeatureExtraction, index, || {
                self.assess_image(image)
            })
        };

        if self.parallel {
            images.par_iter().enumerate().map(assess).collect()
        } else {
            images.iter().enumerate().map(assess).collect()
        }
    }

    /// Combine per-image results. The final level classifies the unrounded
    /// mean with the single-image thresholds.
    pub fn aggregate(&self, risks: &[ImageRisk]) -> Result<AggregateAssessment> {
        if risks.is_empty() {
            return Err(Error::invalid_input(
                "images",
                "at least one image is required to compute a mean score",
            ));
        }

        let _phase = set_phase(AnalysisPhase::Scoring);
        let per_image_scores: Vec<u32> = risks.iter().map(|r| r.score).collect();
        let per_image_levels = risks.iter().map(|r| r.level).collect();
        let total: u64 = per_image_scores.iter().map(|&s| u64::from(s)).sum();
        let mean_score = total as f64 / per_image_scores.len() as f64;
        let final_level = ClassificationThresholds::VISUAL.classify(mean_score);

        tracing::info!(
            images = per_image_scores.len(),
            mean_score,
            final_level = %final_level,
            "Scored visual batch"
        );

        Ok(AggregateAssessment {
            per_image_scores,
            per_image_levels,
            mean_score,
            final_level,
        })
    }

    pub fn score_batch(&self, images: &[Image]) -> Result<AggregateAssessment> {
        if images.is_empty() {
            return Err(Error::invalid_input(
                "images",
                "at least one image is required to compute a mean score",
            ));
        }

        let risks: Vec<ImageRisk> = self
            .assess_images(images)
            .into_iter()
            .map(|report| report.risk)
            .collect();
        self.aggregate(&risks)
    }
}

/// Score a batch of decoded images with the default scorer.
pub fn score_visual_batch(images: &[Image]) -> Result<AggregateAssessment> {
    VisualRiskScorer::default().score_batch(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Brightness, ColorVariety, RiskLevel, SpatialExtent};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn features(b: Brightness, c: ColorVariety, s: SpatialExtent) -> VisualFeatureSet {
        VisualFeatureSet {
            brightness: b,
            color_variety: c,
            spatial_extent: s,
        }
    }

    fn all_feature_sets() -> Vec<VisualFeatureSet> {
        let mut sets = Vec::new();
        for b in [Brightness::Low, Brightness::Medium, Brightness::High] {
            for c in [ColorVariety::Single, ColorVariety::Multiple] {
                for s in [SpatialExtent::Narrow, SpatialExtent::Wide] {
                    sets.push(features(b, c, s));
                }
            }
        }
        sets
    }

    #[test]
    fn scores_every_feature_combination() {
        let scorer = VisualRiskScorer::new();
        let sets = all_feature_sets();
        assert_eq!(sets.len(), 12);

        for set in sets {
            let risk = scorer.score_one(&set);
            let expected = set.brightness.points()
                + set.color_variety.points()
                + set.spatial_extent.points();
            assert_eq!(risk.score, expected);

            let expected_level = match expected {
                7.. => RiskLevel::High,
                5..=6 => RiskLevel::Moderate,
                _ => RiskLevel::Low,
            };
            assert_eq!(risk.level, expected_level, "{set:?}");
        }
    }

    #[test]
    fn extreme_combinations() {
        let scorer = VisualRiskScorer::new();
        assert_eq!(
            scorer.score_one(&features(
                Brightness::High,
                ColorVariety::Multiple,
                SpatialExtent::Wide
            )),
            ImageRisk {
                score: 8,
                level: RiskLevel::High
            }
        );
        assert_eq!(
            scorer.score_one(&features(
                Brightness::Low,
                ColorVariety::Single,
                SpatialExtent::Narrow
            )),
            ImageRisk {
                score: 3,
                level: RiskLevel::Low
            }
        );
    }

    #[test]
    fn exact_threshold_scores() {
        let scorer = VisualRiskScorer::new();
        // 1 + 1 + 3 = 5
        let five = scorer.score_one(&features(
            Brightness::Low,
            ColorVariety::Single,
            SpatialExtent::Wide,
        ));
        assert_eq!((five.score, five.level), (5, RiskLevel::Moderate));

        // 2 + 2 + 3 = 7
        let seven = scorer.score_one(&features(
            Brightness::Medium,
            ColorVariety::Multiple,
            SpatialExtent::Wide,
        ));
        assert_eq!((seven.score, seven.level), (7, RiskLevel::High));
    }

    #[test]
    fn aggregate_uses_mean_not_majority() {
        let scorer = VisualRiskScorer::new();
        let risks = [
            ImageRisk {
                score: 3,
                level: RiskLevel::Low,
            },
            ImageRisk {
                score: 8,
                level: RiskLevel::High,
            },
        ];
        let aggregate = scorer.aggregate(&risks).unwrap();
        assert_eq!(aggregate.per_image_scores, vec![3, 8]);
        assert_eq!(
            aggregate.per_image_levels,
            vec![RiskLevel::Low, RiskLevel::High]
        );
        assert_eq!(aggregate.mean_score, 5.5);
        assert_eq!(aggregate.final_level, RiskLevel::Moderate);
    }

    #[test]
    fn aggregate_compares_unrounded_mean() {
        // mean 6.996..., rounds to 7.00 for display but stays MODERATE
        let scorer = VisualRiskScorer::new();
        let mut risks = vec![
            ImageRisk {
                score: 7,
                level: RiskLevel::High
            };
            299
        ];
        risks.push(ImageRisk {
            score: 6,
            level: RiskLevel::Moderate,
        });
        let aggregate = scorer.aggregate(&risks).unwrap();
        assert!(aggregate.mean_score < 7.0);
        assert_eq!(aggregate.display_mean(), 7.0);
        assert_eq!(aggregate.final_level, RiskLevel::Moderate);
    }

    #[test]
    fn empty_batch_is_invalid_input() {
        let scorer = VisualRiskScorer::new();
        assert!(scorer.score_batch(&[]).unwrap_err().is_invalid_input());
        assert!(scorer.aggregate(&[]).unwrap_err().is_invalid_input());
    }

    #[test]
    fn batch_preserves_input_order() {
        let images = vec![
            Image::filled(4, 4, [0, 0, 0]).unwrap(),
            Image::filled(4, 4, [255, 255, 255]).unwrap(),
            Image::filled(4, 4, [115, 115, 115]).unwrap(),
        ];
        for parallel in [true, false] {
            let aggregate = VisualRiskScorer::new()
                .with_parallel(parallel)
                .score_batch(&images)
                .unwrap();
            // black: low/single/narrow, white: high/single/wide, gray: medium/single/wide
            assert_eq!(aggregate.per_image_scores, vec![3, 7, 6]);
            assert_eq!(
                aggregate.per_image_levels,
                vec![RiskLevel::Low, RiskLevel::High, RiskLevel::Moderate]
            );
            assert_eq!(aggregate.final_level, ClassificationThresholds::VISUAL.classify(16.0 / 3.0));
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let images = vec![Image::filled(5, 5, [40, 180, 90]).unwrap()];
        let first = score_visual_batch(&images).unwrap();
        let second = score_visual_batch(&images).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn uniform_batches_keep_single_image_level(index in 0usize..12, count in 1usize..20) {
            let scorer = VisualRiskScorer::new();
            let set = all_feature_sets()[index];
            let risk = scorer.score_one(&set);
            let aggregate = scorer.aggregate(&vec![risk; count]).unwrap();
            prop_assert_eq!(aggregate.mean_score, f64::from(risk.score));
            prop_assert_eq!(aggregate.final_level, risk.level);
        }

        #[test]
        fn score_stays_in_range(index in 0usize..12) {
            let risk = VisualRiskScorer::new().score_one(&all_feature_sets()[index]);
            prop_assert!((3..=8).contains(&risk.score));
        }
    }
}
