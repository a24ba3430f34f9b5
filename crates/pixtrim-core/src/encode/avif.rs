//! AVIF encoding.
//!
//! Uses the `image` crate's AVIF encoder with the same higher-is-better
//! quality scale as every other format. Builds without the `avif` feature
//! report the format as unsupported instead of substituting another codec.

use super::EncodeError;
use crate::decode::ImageSurface;

/// Encoder speed used when none is configured (1 = slowest/best, 10 = fastest).
pub const DEFAULT_AVIF_SPEED: u8 = 8;

/// Whether this build can produce AVIF output.
pub fn avif_supported() -> bool {
    cfg!(feature = "avif")
}

/// Encode a surface to AVIF bytes.
#[cfg(feature = "avif")]
pub fn encode_avif(surface: &ImageSurface, quality: f32, speed: u8) -> Result<Vec<u8>, EncodeError> {
    use image::codecs::avif::AvifEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    let (width, height) = surface.dimensions();

    let mut buffer = Vec::new();
    AvifEncoder::new_with_speed_quality(
        &mut buffer,
        speed.clamp(1, 10),
        super::native_quality(quality),
    )
    .write_image(surface.pixels(), width, height, ExtendedColorType::Rgba8)
    .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// Encode a surface to AVIF bytes.
#[cfg(not(feature = "avif"))]
pub fn encode_avif(
    _surface: &ImageSurface,
    _quality: f32,
    _speed: u8,
) -> Result<Vec<u8>, EncodeError> {
    Err(EncodeError::UnsupportedFormat("avif".to_string()))
}
