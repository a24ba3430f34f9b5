//! Region drawing: crop and resample in a single pass.
//!
//! The source region is read through a view of the surface and resampled
//! straight into the destination size, so a crop followed by a resize never
//! goes through an intermediate cropped buffer or a second resample.

use super::{DecodeError, FilterType, ImageSurface};
use crate::types::CropRect;

/// Largest surface a draw may allocate, in pixels (the browser canvas area
/// limit, 16384 x 16384).
pub const MAX_OUTPUT_PIXELS: u64 = 16_384 * 16_384;

/// Check whether a `width x height` surface is within `MAX_OUTPUT_PIXELS`.
pub fn fits_output_limit(width: u32, height: u32) -> bool {
    u64::from(width) * u64::from(height) <= MAX_OUTPUT_PIXELS
}

/// Integer pixel bounds of a source region, always inside the surface and
/// at least 1x1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRegion {
    /// Snap a real-valued region to whole pixels inside a `width x height`
    /// surface.
    ///
    /// The origin and the far edge are each rounded to the nearest pixel, so
    /// the snapped region never drifts more than half a pixel from the
    /// requested one.
    pub fn snap(region: &CropRect, width: u32, height: u32) -> Self {
        let (x, w) = snap_axis(region.x, region.width, width);
        let (y, h) = snap_axis(region.y, region.height, height);
        Self {
            x,
            y,
            width: w,
            height: h,
        }
    }

    fn is_full(&self, width: u32, height: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == width && self.height == height
    }
}

fn snap_axis(start: f64, length: f64, limit: u32) -> (u32, u32) {
    let limit_f = limit as f64;
    let start = if start.is_finite() { start } else { 0.0 };
    let end = if length.is_finite() {
        start + length
    } else {
        limit_f
    };

    let lo = start.round().clamp(0.0, limit_f - 1.0) as u32;
    let hi = (end.round().clamp(0.0, limit_f) as u32).max(lo + 1);
    (lo, hi - lo)
}

/// Draw `region` of `surface` scaled to exactly `width x height`.
///
/// # Errors
///
/// Returns `DecodeError::Empty` if the destination or the source surface has
/// a zero dimension, and `DecodeError::TooLarge` if the destination exceeds
/// `MAX_OUTPUT_PIXELS`.
pub fn draw_region(
    surface: &ImageSurface,
    region: &CropRect,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<ImageSurface, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::Empty { width, height });
    }
    if !fits_output_limit(width, height) {
        return Err(DecodeError::TooLarge { width, height });
    }
    if surface.is_empty() {
        let (width, height) = surface.dimensions();
        return Err(DecodeError::Empty { width, height });
    }

    let (src_w, src_h) = surface.dimensions();
    let px = PixelRegion::snap(region, src_w, src_h);

    // Fast path: whole surface at its own size
    if px.is_full(src_w, src_h) && (width, height) == (src_w, src_h) {
        return Ok(surface.clone());
    }

    let buffer = surface.as_image_buffer();
    let resampled = if px.is_full(src_w, src_h) {
        image::imageops::resize(&buffer, width, height, filter.to_image_filter())
    } else {
        let view = image::imageops::crop_imm(&buffer, px.x, px.y, px.width, px.height);
        image::imageops::resize(&*view, width, height, filter.to_image_filter())
    };

    Ok(ImageSurface::from_rgba_image(resampled))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A surface where red encodes x and green encodes y.
    fn gradient(width: u32, height: u32) -> ImageSurface {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[x as u8, y as u8, 0, 255]);
            }
        }
        ImageSurface::from_rgba(width, height, pixels).unwrap()
    }

    #[test]
    fn test_snap_inside_bounds() {
        let px = PixelRegion::snap(&CropRect::new(10.4, 20.6, 30.2, 40.0), 100, 100);
        assert_eq!(
            px,
            PixelRegion {
                x: 10,
                y: 21,
                width: 31,
                height: 40
            }
        );
    }

    #[test]
    fn test_snap_clamps_overshoot() {
        let px = PixelRegion::snap(&CropRect::new(90.0, -5.0, 50.0, 500.0), 100, 80);
        assert_eq!(px.x, 90);
        assert_eq!(px.width, 10);
        assert_eq!(px.y, 0);
        assert_eq!(px.height, 80);
    }

    #[test]
    fn test_snap_minimum_one_pixel() {
        let px = PixelRegion::snap(&CropRect::new(50.0, 50.0, 0.1, 0.0), 100, 100);
        assert_eq!(px.width, 1);
        assert_eq!(px.height, 1);

        let px = PixelRegion::snap(&CropRect::new(100.0, 100.0, 5.0, 5.0), 100, 100);
        assert_eq!((px.x, px.y, px.width, px.height), (99, 99, 1, 1));
    }

    #[test]
    fn test_draw_identity_is_copy() {
        let img = gradient(20, 10);
        let out = draw_region(&img, &CropRect::full(20, 10), 20, 10, FilterType::Bilinear).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_draw_crop_without_scaling() {
        let img = gradient(20, 10);
        let out = draw_region(
            &img,
            &CropRect::new(5.0, 2.0, 4.0, 3.0),
            4,
            3,
            FilterType::Nearest,
        )
        .unwrap();

        assert_eq!(out.dimensions(), (4, 3));
        assert_eq!(out.pixel(0, 0), Some([5, 2, 0, 255]));
        assert_eq!(out.pixel(3, 2), Some([8, 4, 0, 255]));
    }

    #[test]
    fn test_draw_crop_and_scale() {
        let img = gradient(40, 40);
        let out = draw_region(
            &img,
            &CropRect::new(10.0, 10.0, 20.0, 10.0),
            5,
            7,
            FilterType::Lanczos3,
        )
        .unwrap();
        assert_eq!(out.dimensions(), (5, 7));
    }

    #[test]
    fn test_draw_full_scale_down() {
        let img = gradient(30, 20);
        let out = draw_region(&img, &CropRect::full(30, 20), 15, 10, FilterType::Bilinear).unwrap();
        assert_eq!(out.dimensions(), (15, 10));
        assert_eq!(out.pixels().len(), 15 * 10 * 4);
    }

    #[test]
    fn test_draw_zero_destination_error() {
        let img = gradient(10, 10);
        assert!(draw_region(&img, &CropRect::full(10, 10), 0, 5, FilterType::Bilinear).is_err());
        assert!(draw_region(&img, &CropRect::full(10, 10), 5, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_draw_over_pixel_limit_error() {
        let img = gradient(4, 4);
        let result = draw_region(
            &img,
            &CropRect::full(4, 4),
            u32::MAX,
            u32::MAX,
            FilterType::Bilinear,
        );
        assert!(matches!(
            result,
            Err(DecodeError::TooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        ));
    }

    #[test]
    fn test_fits_output_limit() {
        assert!(fits_output_limit(16_384, 16_384));
        assert!(!fits_output_limit(16_384, 16_385));
        assert!(!fits_output_limit(50_000, 37_500));
    }

    #[test]
    fn test_all_filter_types() {
        let img = gradient(16, 8);
        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let out = draw_region(&img, &CropRect::new(2.0, 2.0, 8.0, 4.0), 3, 3, filter).unwrap();
            assert_eq!(out.dimensions(), (3, 3));
        }
    }
}
