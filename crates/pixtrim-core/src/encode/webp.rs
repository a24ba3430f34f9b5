//! WebP encoding.
//!
//! The pure-Rust WebP encoder in the `image` crate is lossless only. To give
//! the quality setting a real effect, RGB channels are quantized to fewer
//! levels before encoding when quality is below 100; the lossless encoder
//! then compresses the reduced palette much better.

use image::codecs::webp::WebPEncoder;
use image::ExtendedColorType;

use super::EncodeError;
use crate::decode::ImageSurface;

/// Encode a surface to WebP bytes.
pub fn encode_webp(surface: &ImageSurface, quality: f32) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = surface.dimensions();
    let mut rgba = surface.pixels().to_vec();
    quantize_rgb(&mut rgba, quality);

    let mut buffer = Vec::new();
    WebPEncoder::new_lossless(&mut buffer)
        .encode(&rgba, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// Number of levels kept per channel for a quality fraction.
///
/// Biased toward finer steps at high quality while low qualities stay
/// coarse.
pub fn levels_for(quality: f32) -> u16 {
    if quality >= 1.0 {
        return 256;
    }
    let q = quality.clamp(0.0, 1.0);
    let levels = 2.0 + q * q * 254.0;
    levels.round().clamp(2.0, 256.0) as u16
}

fn quantize_rgb(data: &mut [u8], quality: f32) {
    let levels = levels_for(quality);
    if levels >= 256 {
        return;
    }
    let step = 255.0 / (levels as f32 - 1.0);
    for pixel in data.chunks_exact_mut(4) {
        // Alpha is left untouched
        for channel in pixel.iter_mut().take(3) {
            let bucket = (f32::from(*channel) / step).round();
            *channel = (bucket * step).round().clamp(0.0, 255.0) as u8;
        }
    }
}
