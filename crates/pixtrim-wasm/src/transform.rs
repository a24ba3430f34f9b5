//! WASM bindings for the crop / resize / re-encode pipeline.
//!
//! Requests are plain JS objects deserialized with `serde-wasm-bindgen`:
//!
//! ```typescript
//! const request = {
//!   crop: { x: 100, y: 100, width: 400, height: 300 },   // optional
//!   resize: { width: 200, maintainAspectRatio: true },   // optional
//!   conversion: { format: 'jpeg', quality: 90 },
//! };
//! const result = optimize_image(bytes, request, 1);
//! ```

use crate::types::{filter_from_u8, JsImageSurface, JsTransformResult};
use pixtrim_core::{ImageCodec, ImageSurface, TransformRequest};
use wasm_bindgen::prelude::*;

/// Crop, resize and encode an already decoded image.
///
/// Takes ownership of `image`: its pixel memory is released once the output
/// has been drawn, and the JS handle is no longer usable afterwards.
///
/// * `original_size` - byte size of the file `image` was decoded from
/// * `filter` - 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
#[wasm_bindgen]
pub fn transform_image(
    image: JsImageSurface,
    request: JsValue,
    original_size: f64,
    filter: u8,
) -> Result<JsTransformResult, JsValue> {
    let request = parse_request(request)?;
    run_transform(
        image.into_surface(),
        &request,
        original_size.max(0.0) as u64,
        filter,
    )
}

/// Decode `bytes` and run the pipeline, measuring compression against
/// `bytes.length`.
#[wasm_bindgen]
pub fn optimize_image(
    bytes: &[u8],
    request: JsValue,
    filter: u8,
) -> Result<JsTransformResult, JsValue> {
    let request = parse_request(request)?;
    run_optimize(bytes, &request, filter)
}

fn parse_request(value: JsValue) -> Result<TransformRequest, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(TransformRequest::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("invalid transform request: {}", e)))
}

fn codec(filter: u8) -> ImageCodec {
    ImageCodec::new().with_filter(filter_from_u8(filter))
}

fn run_transform(
    surface: ImageSurface,
    request: &TransformRequest,
    original_size: u64,
    filter: u8,
) -> Result<JsTransformResult, JsValue> {
    pixtrim_core::transform(&codec(filter), surface, request, original_size)
        .map(JsTransformResult::from_result)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn run_optimize(
    bytes: &[u8],
    request: &TransformRequest,
    filter: u8,
) -> Result<JsTransformResult, JsValue> {
    pixtrim_core::optimize(&codec(filter), bytes, request)
        .map(JsTransformResult::from_result)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
