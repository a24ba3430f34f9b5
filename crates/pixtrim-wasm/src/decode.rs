//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode JPEG/PNG/WebP bytes into an upright RGBA surface
//! - [`get_orientation`] - Read the EXIF orientation tag (1-8)
//! - [`draw_region`] - Render a region of a surface at a new size

use crate::types::{filter_from_u8, JsImageSurface};
use pixtrim_core::{decode, CropRect};
use wasm_bindgen::prelude::*;

/// Decode image bytes, applying EXIF orientation so `width`/`height` are the
/// upright dimensions.
///
/// # Errors
///
/// Returns an error if the format is not recognized or the data is corrupt.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImageSurface, JsValue> {
    decode::decode_image(bytes)
        .map(JsImageSurface::from_surface)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// EXIF orientation of the image bytes, 1 when absent.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}

/// Render the image-space rectangle (`x`, `y`, `width`, `height`) of `image`
/// scaled to `dest_width x dest_height`.
///
/// `filter`: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn draw_region(
    image: &JsImageSurface,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    dest_width: u32,
    dest_height: u32,
    filter: u8,
) -> Result<JsImageSurface, JsValue> {
    let region = CropRect::new(x, y, width, height);
    decode::draw_region(
        image.surface(),
        &region,
        dest_width,
        dest_height,
        filter_from_u8(filter),
    )
    .map(JsImageSurface::from_surface)
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixtrim_core::{ImageCodec, ImageSurface, OutputFormat, RasterCodec};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        ImageCodec::new()
            .encode(
                &ImageSurface::filled(width, height, [40, 80, 120, 255]),
                OutputFormat::Png,
                1.0,
            )
            .unwrap()
    }

    #[test]
    fn test_decode_png() {
        let img = decode_image(&png_bytes(12, 7)).unwrap();
        assert_eq!((img.width(), img.height()), (12, 7));
        assert_eq!(img.byte_length(), 12 * 7 * 4);
    }

    #[test]
    fn test_orientation_defaults_to_normal() {
        assert_eq!(get_orientation(&png_bytes(2, 2)), 1);
        assert_eq!(get_orientation(&[]), 1);
    }

    #[test]
    fn test_draw_region() {
        let img = JsImageSurface::from_surface(ImageSurface::filled(100, 50, [1, 2, 3, 255]));
        let out = draw_region(&img, 10.0, 10.0, 40.0, 20.0, 20, 10, 1).unwrap();
        assert_eq!((out.width(), out.height()), (20, 10));
        assert_eq!(&out.pixels()[0..4], &[1, 2, 3, 255]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_garbage_fails() {
        assert!(decode_image(&[0, 1, 2, 3]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_draw_to_zero_fails() {
        let img = JsImageSurface::new(4, 4, vec![0; 64]).unwrap();
        assert!(draw_region(&img, 0.0, 0.0, 4.0, 4.0, 0, 4, 1).is_err());
    }
}
