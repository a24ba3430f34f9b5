//! Image encoding pipeline for Pixtrim.
//!
//! This module provides functionality for:
//! - Encoding a surface to WebP, AVIF, JPEG or PNG bytes
//! - Translating the normalized 0.0-1.0 quality fraction into each
//!   encoder's native setting
//!
//! # Architecture
//!
//! The encoding pipeline is designed to be used from Web Workers via WASM bindings.
//! All operations are synchronous and single-threaded within WASM, and
//! deterministic: the same surface and settings always produce the same bytes.

mod avif;
mod jpeg;
mod png;
mod webp;

pub use avif::{avif_supported, encode_avif, DEFAULT_AVIF_SPEED};
pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use webp::encode_webp;

use thiserror::Error;

use crate::decode::ImageSurface;
use crate::types::OutputFormat;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The format cannot be produced by this build.
    #[error("Encoding to {0} is not supported in this build")]
    UnsupportedFormat(String),

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder rejected the image
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a surface in `format` at a 0.0-1.0 quality fraction.
pub fn encode_surface(
    surface: &ImageSurface,
    format: OutputFormat,
    quality: f32,
    avif_speed: u8,
) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = surface.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    match format {
        OutputFormat::WebP => encode_webp(surface, quality),
        OutputFormat::Avif => encode_avif(surface, quality, avif_speed),
        OutputFormat::Jpeg => encode_jpeg(surface, quality),
        OutputFormat::Png => encode_png(surface, quality),
    }
}

/// Convert a quality fraction to the 1-100 scale JPEG and AVIF use.
pub(crate) fn native_quality(quality: f32) -> u8 {
    if !quality.is_finite() {
        return 100;
    }
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}
