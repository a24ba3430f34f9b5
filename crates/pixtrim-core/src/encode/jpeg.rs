//! JPEG encoding.
//!
//! JPEG has no alpha channel; pixels are composited over black first, as a
//! browser canvas does when it exports JPEG.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{native_quality, EncodeError};
use crate::decode::ImageSurface;

/// Encode a surface to JPEG bytes.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(surface: &ImageSurface, quality: f32) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = surface.dimensions();
    let rgb: Vec<u8> = surface
        .pixels()
        .chunks_exact(4)
        .flat_map(|px| {
            let alpha = px[3];
            [
                over_black(px[0], alpha),
                over_black(px[1], alpha),
                over_black(px[2], alpha),
            ]
        })
        .collect();

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, native_quality(quality))
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// Premultiply one channel by alpha, rounding to nearest.
fn over_black(channel: u8, alpha: u8) -> u8 {
    ((u16::from(channel) * u16::from(alpha) + 127) / 255) as u8
}
