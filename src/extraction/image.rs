use crate::core::{Error, Result};
use image::RgbImage;
use std::path::Path;

/// Immutable 8-bit RGB pixel grid, rows then columns.
///
/// Construction guarantees a positive width and height, so everything
/// downstream can divide by the pixel count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: RgbImage,
}

impl Image {
    pub fn new(pixels: RgbImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::invalid_input(
                "image",
                format!("image must have positive dimensions, got {width}x{height}"),
            ));
        }
        Ok(Self { pixels })
    }

    /// Wrap an interleaved RGB buffer of exactly `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if bytes.len() != expected {
            return Err(Error::invalid_input(
                "image",
                format!(
                    "pixel buffer holds {} bytes, {width}x{height} RGB needs {expected}",
                    bytes.len()
                ),
            ));
        }
        let pixels = RgbImage::from_raw(width, height, bytes).ok_or_else(|| {
            Error::invalid_input("image", format!("cannot build {width}x{height} RGB buffer"))
        })?;
        Self::new(pixels)
    }

    /// Build a uniformly colored image.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self> {
        Self::new(RgbImage::from_pixel(width, height, image::Rgb(rgb)))
    }

    /// Decode encoded image bytes (PNG or JPEG), converting to 8-bit RGB.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Self::decode_named(bytes, "<memory>")
    }

    /// Decode with a source name used in error messages.
    pub fn decode_named(bytes: &[u8], source_name: &str) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::decode(source_name, "no image data"));
        }
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| Error::decode(source_name, e.to_string()))?;
        Self::new(decoded.to_rgb8())
    }

    /// Read and decode an image file.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        Self::decode_named(&bytes, &path.display().to_string())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Interleaved RGB bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}
