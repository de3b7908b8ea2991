// Synthetic aurora imagery for integration tests
#![allow(dead_code)]

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Night sky with nothing lit: low / single / narrow, score 3
pub fn dark_sky() -> RgbImage {
    RgbImage::from_pixel(32, 24, Rgb([4, 6, 10]))
}

/// Bright sky alternating white and green-blue columns:
/// high / multiple / wide, score 8
pub fn storm_sky() -> RgbImage {
    RgbImage::from_fn(32, 24, |x, _| {
        if x % 2 == 0 {
            Rgb([255, 255, 255])
        } else {
            Rgb([120, 255, 60])
        }
    })
}

/// Uniform mid-gray, fully lit: medium / single / wide, score 6
pub fn gray_sky() -> RgbImage {
    RgbImage::from_pixel(32, 24, Rgb([115, 115, 115]))
}

pub fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).expect("encode test image");
    buf.into_inner()
}

pub fn png_bytes(img: &RgbImage) -> Vec<u8> {
    encode(img, ImageFormat::Png)
}

pub fn write_png(dir: &Path, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, png_bytes(img)).expect("write test image");
    path
}
