//! Domain types shared by the extraction and scoring pipelines.
//!
//! Every categorical observation descriptor is a closed enumeration. Labels
//! coming from an adapter (CLI flags, JSON, form values) are parsed with
//! [`FromStr`], which accepts the canonical English label as well as the
//! Turkish vocabulary of the paper observation form. Anything else is an
//! [`Error::InvalidInput`] naming the field and the accepted values.

pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Find the variant whose alias list contains `value`, ignoring case and
/// surrounding whitespace.
///
/// `İ` folds to plain `i`; `to_lowercase` would leave a combining dot.
fn parse_label<T: Copy>(
    field: &str,
    value: &str,
    table: &[(T, &[&str])],
    expected: &[&str],
) -> Result<T> {
    let normalized = value.trim().replace('İ', "i").to_lowercase();
    table
        .iter()
        .find(|(_, aliases)| aliases.contains(&normalized.as_str()))
        .map(|(variant, _)| *variant)
        .ok_or_else(|| Error::unknown_label(field, value, expected))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Low,
    Medium,
    High,
}

impl Brightness {
    pub const LABELS: &'static [&'static str] = &["low", "medium", "high"];

    pub fn points(self) -> u32 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Brightness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_label(
            "brightness",
            s,
            &[
                (Self::Low, &["low", "düşük"]),
                (Self::Medium, &["medium", "orta"]),
                (Self::High, &["high", "yüksek"]),
            ],
            Self::LABELS,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorVariety {
    Single,
    Multiple,
}

impl ColorVariety {
    pub const LABELS: &'static [&'static str] = &["single", "multiple"];

    pub fn points(self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Multiple => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

impl FromStr for ColorVariety {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_label(
            "color_variety",
            s,
            &[
                (Self::Single, &["single", "tek renk"]),
                (Self::Multiple, &["multiple", "çok renkli"]),
            ],
            Self::LABELS,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpatialExtent {
    Narrow,
    Wide,
}

impl SpatialExtent {
    pub const LABELS: &'static [&'static str] = &["narrow", "wide"];

    pub fn points(self) -> u32 {
        match self {
            Self::Narrow => 1,
            Self::Wide => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }
}

impl FromStr for SpatialExtent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_label(
            "spatial_extent",
            s,
            &[
                (Self::Narrow, &["narrow", "dar"]),
                (Self::Wide, &["wide", "geniş"]),
            ],
            Self::LABELS,
        )
    }
}

/// How the aurora changes over time. Only reported manually, never derived
/// from imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemporalBehavior {
    Calm,
    Variable,
    Burst,
}

impl TemporalBehavior {
    pub const LABELS: &'static [&'static str] = &["calm", "variable", "burst"];

    pub fn points(self) -> u32 {
        match self {
            Self::Calm => 1,
            Self::Variable => 2,
            Self::Burst => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Variable => "variable",
            Self::Burst => "burst",
        }
    }
}

impl FromStr for TemporalBehavior {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_label(
            "temporal_behavior",
            s,
            &[
                (Self::Calm, &["calm", "sakin"]),
                (Self::Variable, &["variable", "değişken"]),
                (Self::Burst, &["burst", "patlama"]),
            ],
            Self::LABELS,
        )
    }
}

macro_rules! impl_label_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

impl_label_display!(Brightness, ColorVariety, SpatialExtent, TemporalBehavior);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [Self::Low, Self::Moderate, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_label(
            "risk_level",
            s,
            &[
                (Self::Low, &["low"]),
                (Self::Moderate, &["moderate"]),
                (Self::High, &["high"]),
            ],
            &["LOW", "MODERATE", "HIGH"],
        )
    }
}

/// Categorical features derived from a single image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualFeatureSet {
    pub brightness: Brightness,
    pub color_variety: ColorVariety,
    pub spatial_extent: SpatialExtent,
}

/// Observation descriptors chosen by the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManualFeatureSet {
    pub brightness: Brightness,
    pub color_variety: ColorVariety,
    pub spatial_extent: SpatialExtent,
    pub temporal_behavior: TemporalBehavior,
}

impl ManualFeatureSet {
    /// Build a feature set from raw labels, failing on the first label that
    /// falls outside its domain.
    pub fn from_labels(
        brightness: &str,
        color_variety: &str,
        spatial_extent: &str,
        temporal_behavior: &str,
    ) -> Result<Self> {
        Ok(Self {
            brightness: brightness.parse()?,
            color_variety: color_variety.parse()?,
            spatial_extent: spatial_extent.parse()?,
            temporal_behavior: temporal_behavior.parse()?,
        })
    }
}

/// Per-image visual result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRisk {
    pub score: u32,
    pub level: RiskLevel,
}

/// Manual-mode result including the operational impact statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
    pub impacts: Vec<String>,
}

/// Combined result over a batch of images.
///
/// `final_level` comes from classifying `mean_score`, not from a vote over
/// `per_image_levels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateAssessment {
    pub per_image_scores: Vec<u32>,
    pub per_image_levels: Vec<RiskLevel>,
    pub mean_score: f64,
    pub final_level: RiskLevel,
}

impl AggregateAssessment {
    /// Mean score rounded to two decimals, for display only. Exact ties
    /// round to even.
    pub fn display_mean(&self) -> f64 {
        (self.mean_score * 100.0).round_ties_even() / 100.0
    }

    pub fn image_count(&self) -> usize {
        self.per_image_scores.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_labels_case_insensitively() {
        assert_eq!("HIGH".parse::<Brightness>().unwrap(), Brightness::High);
        assert_eq!(" wide ".parse::<SpatialExtent>().unwrap(), SpatialExtent::Wide);
        assert_eq!(
            "Multiple".parse::<ColorVariety>().unwrap(),
            ColorVariety::Multiple
        );
        assert_eq!(
            "burst".parse::<TemporalBehavior>().unwrap(),
            TemporalBehavior::Burst
        );
    }

    #[test]
    fn parses_observation_form_vocabulary() {
        let features =
            ManualFeatureSet::from_labels("yüksek", "çok renkli", "geniş", "patlama").unwrap();
        assert_eq!(
            features,
            ManualFeatureSet {
                brightness: Brightness::High,
                color_variety: ColorVariety::Multiple,
                spatial_extent: SpatialExtent::Wide,
                temporal_behavior: TemporalBehavior::Burst,
            }
        );

        assert_eq!("Düşük".parse::<Brightness>().unwrap(), Brightness::Low);
        assert_eq!("tek renk".parse::<ColorVariety>().unwrap(), ColorVariety::Single);
        assert_eq!(
            "değişken".parse::<TemporalBehavior>().unwrap(),
            TemporalBehavior::Variable
        );
    }

    #[test]
    fn rejects_unknown_label_with_field_name() {
        let err = ManualFeatureSet::from_labels("medium", "single", "enormous", "calm")
            .unwrap_err();
        assert!(err.is_invalid_input());
        let message = err.to_string();
        assert!(message.contains("spatial_extent"), "{message}");
        assert!(message.contains("enormous"), "{message}");
    }

    #[test]
    fn rejects_empty_label() {
        assert!("".parse::<TemporalBehavior>().is_err());
    }

    #[test]
    fn risk_level_serializes_uppercase() {
        let json = serde_json::to_string(&RiskLevel::Moderate).unwrap();
        assert_eq!(json, "\"MODERATE\"");
        let back: RiskLevel = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(back, RiskLevel::High);
    }

    #[test]
    fn features_serialize_lowercase() {
        let features = VisualFeatureSet {
            brightness: Brightness::Medium,
            color_variety: ColorVariety::Single,
            spatial_extent: SpatialExtent::Wide,
        };
        let json = serde_json::to_value(features).unwrap();
        assert_eq!(json["brightness"], "medium");
        assert_eq!(json["color_variety"], "single");
        assert_eq!(json["spatial_extent"], "wide");
    }

    #[test]
    fn display_mean_rounds_to_two_decimals() {
        let aggregate = AggregateAssessment {
            per_image_scores: vec![3, 4, 4],
            per_image_levels: vec![RiskLevel::Low; 3],
            mean_score: 11.0 / 3.0,
            final_level: RiskLevel::Low,
        };
        assert_eq!(aggregate.display_mean(), 3.67);
        assert_eq!(aggregate.image_count(), 3);
    }

    #[test]
    fn display_mean_rounds_exact_ties_to_even() {
        let with_mean = |mean_score: f64| AggregateAssessment {
            per_image_scores: vec![5; 8],
            per_image_levels: vec![RiskLevel::Moderate; 8],
            mean_score,
            final_level: RiskLevel::Moderate,
        };
        assert_eq!(with_mean(41.0 / 8.0).display_mean(), 5.12);
        assert_eq!(with_mean(45.0 / 8.0).display_mean(), 5.62);
        assert_eq!(format!("{:.2}", with_mean(41.0 / 8.0).display_mean()), "5.12");
    }

    #[test]
    fn uppercase_form_labels_with_dotted_capital_i() {
        assert_eq!("GENİŞ".parse::<SpatialExtent>().unwrap(), SpatialExtent::Wide);
        assert_eq!(
            "DEĞİŞKEN".parse::<TemporalBehavior>().unwrap(),
            TemporalBehavior::Variable
        );
        assert_eq!("YÜKSEK".parse::<Brightness>().unwrap(), Brightness::High);
        assert_eq!("ÇOK RENKLİ".parse::<ColorVariety>().unwrap(), ColorVariety::Multiple);
    }
}
