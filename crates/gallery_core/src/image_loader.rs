//! Image decoding and thumbnail generation

use crate::AppError;
use image::{DynamicImage, GenericImageView};

/// Decoded RGBA8 pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes
    pub rgba: Vec<u8>,
}

/// A downscaled rendition held by the thumbnail cache
pub type Thumbnail = LoadedImage;

impl LoadedImage {
    fn from_dynamic(img: DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            width,
            height,
            rgba: rgba.into_raw(),
        }
    }

    /// Approximate heap footprint in bytes
    pub fn byte_len(&self) -> usize {
        self.rgba.len()
    }
}

/// Turns encoded file bytes into pixels
///
/// The engine reads bytes through the file system gateway and hands them
/// here, so decoding works the same against a fake file system.
pub trait ImageDecoder: Send + Sync {
    /// Decode and scale down to fit within `max_width` x `max_height`,
    /// preserving aspect ratio. Images already inside the bounds keep their size.
    fn thumbnail(&self, bytes: &[u8], max_width: u32, max_height: u32) -> Result<Thumbnail, AppError>;

    /// Decode at full resolution
    fn decode_full(&self, bytes: &[u8]) -> Result<LoadedImage, AppError>;
}

/// Decoder backed by the `image` crate (jpeg, png, gif, bmp)
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateDecoder;

impl ImageCrateDecoder {
    pub fn new() -> Self {
        Self
    }

    fn decode(bytes: &[u8]) -> Result<DynamicImage, AppError> {
        Ok(image::load_from_memory(bytes)?)
    }
}

impl ImageDecoder for ImageCrateDecoder {
    fn thumbnail(&self, bytes: &[u8], max_width: u32, max_height: u32) -> Result<Thumbnail, AppError> {
        if max_width == 0 || max_height == 0 {
            return Err(AppError::Validation(format!(
                "thumbnail bounds {}x{} are empty",
                max_width, max_height
            )));
        }

        let img = Self::decode(bytes)?;

        // Resize if needed
        let (w, h) = img.dimensions();
        let img = if w > max_width || h > max_height {
            img.thumbnail(max_width, max_height)
        } else {
            img
        };

        Ok(LoadedImage::from_dynamic(img))
    }

    fn decode_full(&self, bytes: &[u8]) -> Result<LoadedImage, AppError> {
        Ok(LoadedImage::from_dynamic(Self::decode(bytes)?))
    }
}
