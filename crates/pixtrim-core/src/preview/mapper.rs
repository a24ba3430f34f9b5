//! Pointer drag to image-space crop mapping.
//!
//! The crop preview shows the image scaled to fit its container, so pointer
//! positions are in display pixels. These functions convert between display
//! space and image space. They are pure and allocation-free so they can run
//! on every pointer-move event of a drag.

use crate::types::{CropRect, Point};

/// Map a drag gesture in display space to a crop rectangle in image space.
///
/// The rectangle spans `drag_start` and `drag_current` in either direction,
/// is scaled by `natural / display` per axis, and is clamped so it never
/// leaves the image, even when the pointer overshoots the canvas.
///
/// Never fails. A click without movement gives a zero-area rectangle (the
/// pipeline rejects it), and a degenerate display size or non-finite pointer
/// gives an empty rectangle at the origin.
pub fn map_drag(
    display_width: f64,
    display_height: f64,
    natural_width: u32,
    natural_height: u32,
    drag_start: Point,
    drag_current: Point,
) -> CropRect {
    let usable = is_extent(display_width)
        && is_extent(display_height)
        && [drag_start.x, drag_start.y, drag_current.x, drag_current.y]
            .iter()
            .all(|v| v.is_finite());
    if !usable {
        return CropRect::default();
    }

    let natural_w = natural_width as f64;
    let natural_h = natural_height as f64;
    let scale_x = natural_w / display_width;
    let scale_y = natural_h / display_height;

    // Display-space rectangle
    let dx = drag_start.x.min(drag_current.x);
    let dy = drag_start.y.min(drag_current.y);
    let dw = (drag_current.x - drag_start.x).abs();
    let dh = (drag_current.y - drag_start.y).abs();

    // Image space, clamped to the image
    let x = (dx * scale_x).clamp(0.0, natural_w);
    let y = (dy * scale_y).clamp(0.0, natural_h);
    let width = (dw * scale_x).min(natural_w - x);
    let height = (dh * scale_y).min(natural_h - y);

    CropRect::new(x, y, width, height)
}

/// Map an image-space crop rectangle into display space, e.g. to draw the
/// crop overlay on the preview canvas.
///
/// Returns an empty rectangle if the natural size is zero.
pub fn crop_to_display(
    crop: &CropRect,
    display_width: f64,
    display_height: f64,
    natural_width: u32,
    natural_height: u32,
) -> CropRect {
    if natural_width == 0 || natural_height == 0 {
        return CropRect::default();
    }
    let scale_x = display_width / natural_width as f64;
    let scale_y = display_height / natural_height as f64;
    CropRect::new(
        crop.x * scale_x,
        crop.y * scale_y,
        crop.width * scale_x,
        crop.height * scale_y,
    )
}

fn is_extent(value: f64) -> bool {
    value.is_finite() && value > 0.0
}


// ============================================================================
// Property-Based Tests
// ============================================================================
