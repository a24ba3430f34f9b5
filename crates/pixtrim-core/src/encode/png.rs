//! PNG encoding.
//!
//! PNG is lossless; the quality fraction only picks how hard the deflate
//! stage works. Transparency is preserved.

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use super::EncodeError;
use crate::decode::ImageSurface;

/// Map the quality fraction to a deflate effort.
pub fn compression_for(quality: f32) -> CompressionType {
    if quality < 0.34 {
        CompressionType::Fast
    } else if quality < 0.67 {
        CompressionType::Default
    } else {
        CompressionType::Best
    }
}

/// Encode a surface to PNG bytes.
pub fn encode_png(surface: &ImageSurface, quality: f32) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = surface.dimensions();

    let mut buffer = Vec::new();
    PngEncoder::new_with_quality(&mut buffer, compression_for(quality), PngFilter::Adaptive)
        .write_image(surface.pixels(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}
