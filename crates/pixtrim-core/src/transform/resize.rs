//! Output dimension resolution.
//!
//! Turns a [`ResizeRequest`] into concrete output dimensions for a given
//! source size. Results stay real-valued so that a crop followed by a resize
//! is rounded exactly once, by [`round_dimensions`].
//!
//! # Rules
//!
//! Evaluated in order:
//! 1. No request, or neither dimension set: source size unchanged
//! 2. Both set, aspect not maintained: exactly the requested size
//! 3. Both set, aspect maintained: fit inside the requested box (contain)
//! 4. Only width: height follows the source aspect ratio
//! 5. Only height: width follows the source aspect ratio
//!
//! The one-sided cases always preserve the aspect ratio; there is no
//! distortion option with a single dimension.

use crate::error::TransformError;
use crate::types::ResizeRequest;

/// Resolve output dimensions for a `source_width x source_height` region.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` if either source dimension is
/// zero, negative or not finite.
pub fn resolve_dimensions(
    source_width: f64,
    source_height: f64,
    resize: Option<&ResizeRequest>,
) -> Result<(f64, f64), TransformError> {
    if !is_valid_extent(source_width) || !is_valid_extent(source_height) {
        return Err(TransformError::InvalidDimensions {
            width: source_width,
            height: source_height,
        });
    }

    let Some(resize) = resize else {
        return Ok((source_width, source_height));
    };

    let dims = match (resize.target_width(), resize.target_height()) {
        (None, None) => (source_width, source_height),
        (Some(w), Some(h)) if !resize.maintain_aspect_ratio => (w as f64, h as f64),
        (Some(w), Some(h)) => {
            let (w, h) = (w as f64, h as f64);
            let source_aspect = source_width / source_height;
            let target_aspect = w / h;
            if source_aspect > target_aspect {
                // Source is relatively wider: fit to width
                (w, w / source_aspect)
            } else {
                (h * source_aspect, h)
            }
        }
        (Some(w), None) => {
            let w = w as f64;
            (w, w * (source_height / source_width))
        }
        (None, Some(h)) => {
            let h = h as f64;
            (h * (source_width / source_height), h)
        }
    };

    Ok(dims)
}

/// Round real-valued dimensions to whole pixels, at least 1x1.
pub fn round_dimensions((width, height): (f64, f64)) -> (u32, u32) {
    (round_extent(width), round_extent(height))
}

fn round_extent(value: f64) -> u32 {
    // `as` saturates: NaN becomes 0, huge values become u32::MAX
    (value.round() as u32).max(1)
}

fn is_valid_extent(value: f64) -> bool {
    value.is_finite() && value > 0.0
}


// ============================================================================
// Property-Based Tests
// ============================================================================
