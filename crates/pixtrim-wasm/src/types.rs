//! WASM-compatible wrapper types.
//!
//! Pixel data and encoded bytes live in WASM memory; getters that return
//! buffers copy them into a JS `Uint8Array`.

use pixtrim_core::{FilterType, ImageSurface, TransformResult};
use wasm_bindgen::prelude::*;

/// A decoded RGBA image held in WASM memory.
#[wasm_bindgen]
pub struct JsImageSurface {
    inner: ImageSurface,
}

#[wasm_bindgen]
impl JsImageSurface {
    /// Wrap RGBA pixel data (4 bytes per pixel, row-major), e.g. the
    /// contents of a canvas `ImageData`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsImageSurface, JsValue> {
        ImageSurface::from_rgba(width, height, pixels)
            .map(Self::from_surface)
            .ok_or_else(|| {
                JsValue::from_str(&format!(
                    "pixel buffer does not match {}x{} RGBA",
                    width, height
                ))
            })
    }

    /// Upright width in pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.natural_width()
    }

    /// Upright height in pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.natural_height()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// RGBA pixel data as a `Uint8Array` (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Release the WASM memory now instead of waiting for the finalizer.
    pub fn free(self) {}
}

impl JsImageSurface {
    pub(crate) fn from_surface(inner: ImageSurface) -> Self {
        Self { inner }
    }

    pub(crate) fn surface(&self) -> &ImageSurface {
        &self.inner
    }

    pub(crate) fn into_surface(self) -> ImageSurface {
        self.inner
    }
}

/// The encoded output of a transform.
#[wasm_bindgen]
pub struct JsTransformResult {
    inner: TransformResult,
}

#[wasm_bindgen]
impl JsTransformResult {
    /// Encoded bytes as a `Uint8Array` (a copy).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.encoded_bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Output size in bytes, as a JS number.
    #[wasm_bindgen(getter)]
    pub fn byte_size(&self) -> f64 {
        self.inner.byte_size as f64
    }

    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.inner.format.as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type().to_string()
    }

    /// Size reduction versus the original, 0.0-1.0.
    #[wasm_bindgen(getter)]
    pub fn compression_ratio(&self) -> f64 {
        self.inner.compression_ratio
    }

    /// Size reduction as a percentage, 0-100.
    #[wasm_bindgen(getter)]
    pub fn compression_percent(&self) -> f64 {
        self.inner.compression_percent()
    }

    /// Download file name stamped with the current time.
    pub fn download_name(&self) -> String {
        self.download_name_at(js_sys::Date::now())
    }

    /// Download file name stamped with `timestamp_ms`.
    pub fn download_name_at(&self, timestamp_ms: f64) -> String {
        self.inner.download_name(timestamp_ms.max(0.0) as u64)
    }

    pub fn free(self) {}
}

impl JsTransformResult {
    pub(crate) fn from_result(inner: TransformResult) -> Self {
        Self { inner }
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear,
    }
}
