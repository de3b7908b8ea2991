//! Visual feature extraction.
//!
//! Converts an aurora photograph into the three categorical features the
//! visual scorer consumes:
//!
//! - **brightness**: mean grayscale intensity, `< 80` low, `< 150` medium,
//!   otherwise high
//! - **color variety**: mean of the per-channel standard deviations,
//!   multiple when `> 40`
//! - **spatial extent**: share of pixels with grayscale `>= 100`, wide when
//!   `> 0.10`
//!
//! Extraction is a pure function of the pixel buffer.

mod image;
pub mod statistics;

pub use self::image::Image;
pub use statistics::{ImageStatistics, LIT_INTENSITY};

use crate::core::{Brightness, ColorVariety, Result, SpatialExtent, VisualFeatureSet};

pub const LOW_BRIGHTNESS_LIMIT: f64 = 80.0;
pub const MEDIUM_BRIGHTNESS_LIMIT: f64 = 150.0;
pub const MULTIPLE_COLOR_STD: f64 = 40.0;
pub const WIDE_EXTENT_RATIO: f64 = 0.10;

pub fn classify_brightness(mean_brightness: f64) -> Brightness {
    if mean_brightness < LOW_BRIGHTNESS_LIMIT {
        Brightness::Low
    } else if mean_brightness < MEDIUM_BRIGHTNESS_LIMIT {
        Brightness::Medium
    } else {
        Brightness::High
    }
}

pub fn classify_color_variety(color_std: f64) -> ColorVariety {
    if color_std > MULTIPLE_COLOR_STD {
        ColorVariety::Multiple
    } else {
        ColorVariety::Single
    }
}

pub fn classify_spatial_extent(lit_ratio: f64) -> SpatialExtent {
    if lit_ratio > WIDE_EXTENT_RATIO {
        SpatialExtent::Wide
    } else {
        SpatialExtent::Narrow
    }
}

impl From<&ImageStatistics> for VisualFeatureSet {
    fn from(stats: &ImageStatistics) -> Self {
        Self {
            brightness: classify_brightness(stats.mean_brightness),
            color_variety: classify_color_variety(stats.color_std),
            spatial_extent: classify_spatial_extent(stats.lit_ratio),
        }
    }
}

/// Extract features together with the measurements they came from.
pub fn analyze(image: &Image) -> (VisualFeatureSet, ImageStatistics) {
    let stats = statistics::compute(image);
    let features = VisualFeatureSet::from(&stats);
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        mean_brightness = stats.mean_brightness,
        color_std = stats.color_std,
        lit_ratio = stats.lit_ratio,
        brightness = %features.brightness,
        color_variety = %features.color_variety,
        spatial_extent = %features.spatial_extent,
        "Extracted visual features"
    );
    (features, stats)
}

pub fn extract(image: &Image) -> VisualFeatureSet {
    analyze(image).0
}

/// Decode encoded image bytes and extract their features.
pub fn extract_features(image_bytes: &[u8]) -> Result<VisualFeatureSet> {
    let image = Image::decode(image_bytes)?;
    Ok(extract(&image))
}
