use super::image::Image;
use serde::{Deserialize, Serialize};

/// Grayscale intensity at or above which a pixel counts as lit.
pub const LIT_INTENSITY: u8 = 100;

/// Raw measurements behind the categorical visual features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageStatistics {
    /// Mean grayscale intensity, 0-255
    pub mean_brightness: f64,
    /// Mean of the three per-channel population standard deviations
    pub color_std: f64,
    /// Fraction of pixels with grayscale intensity >= [`LIT_INTENSITY`]
    pub lit_ratio: f64,
}

/// Fixed-point BT.601 luma with 14 fractional bits, rounded to nearest.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    const R: u32 = 4899;
    const G: u32 = 9617;
    const B: u32 = 1868;
    const SHIFT: u32 = 14;
    ((R * u32::from(r) + G * u32::from(g) + B * u32::from(b) + (1 << (SHIFT - 1))) >> SHIFT) as u8
}

#[derive(Default)]
struct ChannelAccumulator {
    sum: u64,
    sum_sq: u64,
}

impl ChannelAccumulator {
    fn push(&mut self, value: u8) {
        let v = u64::from(value);
        self.sum += v;
        self.sum_sq += v * v;
    }

    // var = (n * sum_sq - sum^2) / n^2, exact in integers
    fn std_dev(&self, n: u64) -> f64 {
        let n = u128::from(n);
        let sum = u128::from(self.sum);
        let numerator = n * u128::from(self.sum_sq) - sum * sum;
        let variance = numerator as f64 / (n * n) as f64;
        variance.sqrt()
    }
}

/// Single pass over the pixel buffer.
pub fn compute(image: &Image) -> ImageStatistics {
    let n = image.pixel_count();
    let mut gray_sum: u64 = 0;
    let mut lit: u64 = 0;
    let mut channels: [ChannelAccumulator; 3] = Default::default();

    for px in image.as_raw().chunks_exact(3) {
        let gray = luma(px[0], px[1], px[2]);
        gray_sum += u64::from(gray);
        if gray >= LIT_INTENSITY {
            lit += 1;
        }
        for (acc, &value) in channels.iter_mut().zip(px) {
            acc.push(value);
        }
    }

    let color_std = channels.iter().map(|c| c.std_dev(n)).sum::<f64>() / 3.0;

    ImageStatistics {
        mean_brightness: gray_sum as f64 / n as f64,
        color_std,
        lit_ratio: lit as f64 / n as f64,
    }
}
