//! Crop validation.
//!
//! Crop rectangles arrive in image-space pixels and may overshoot the image
//! (a drag past the canvas edge, a stale rectangle from a previous image).
//! They are clamped into the image rather than rejected; only a rectangle
//! with no area left after clamping is an error.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left corner
//! - x grows right, y grows down
//! - width/height are in the same pixel units as x/y

use crate::error::TransformError;
use crate::types::CropRect;

/// Clamp `crop` into a `natural_width x natural_height` image.
///
/// The origin is clamped to be non-negative and the extent is shortened so
/// the rectangle ends inside the image.
///
/// # Errors
///
/// Returns `TransformError::InvalidCrop` if the clamped rectangle has zero
/// or negative width or height, or any coordinate is not finite. A
/// zero-size drag is rejected here rather than treated as "no crop".
pub fn clamp_crop(
    crop: &CropRect,
    natural_width: u32,
    natural_height: u32,
) -> Result<CropRect, TransformError> {
    let invalid = || TransformError::InvalidCrop {
        x: crop.x,
        y: crop.y,
        width: crop.width,
        height: crop.height,
    };

    let finite = [crop.x, crop.y, crop.width, crop.height]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return Err(invalid());
    }

    let x = crop.x.max(0.0);
    let y = crop.y.max(0.0);
    let width = crop.width.min(natural_width as f64 - x);
    let height = crop.height.min(natural_height as f64 - y);

    let clamped = CropRect::new(x, y, width, height);
    if !clamped.has_area() {
        return Err(invalid());
    }

    if clamped != *crop {
        log::warn!(
            "crop {:?} clamped to {:?} for {}x{} image",
            crop,
            clamped,
            natural_width,
            natural_height
        );
    }
    Ok(clamped)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
