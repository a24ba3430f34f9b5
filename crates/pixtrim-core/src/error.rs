//! Pipeline-level error type.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Failures of a single transform request.
///
/// All variants are terminal for the request in progress; nothing is retried
/// and no partial result is returned.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Source (or working) dimensions are zero, negative or not finite.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// The crop rectangle has no area once clamped to the image bounds.
    #[error("Invalid crop: {width}x{height} at ({x}, {y}) has no area inside the image")]
    InvalidCrop {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    /// The resolved output size is over the pixel limit.
    #[error("Output too large: {width}x{height} exceeds {max_pixels} pixels")]
    OutputTooLarge {
        width: u32,
        height: u32,
        max_pixels: u64,
    },

    /// Input bytes could not be decoded into a surface.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The codec could not produce output in the requested format.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
