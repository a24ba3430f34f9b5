//! Crop preview bindings: canvas sizing and drag mapping.
//!
//! Called on every pointer move, so these take and return plain numbers and
//! small objects instead of wrapper classes.

use pixtrim_core::{preview, CropRect, DisplayFit, Point};
use wasm_bindgen::prelude::*;

/// Map a drag on the preview canvas to an image-space crop rectangle
/// `{ x, y, width, height }`.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn map_drag(
    display_width: f64,
    display_height: f64,
    natural_width: u32,
    natural_height: u32,
    start_x: f64,
    start_y: f64,
    current_x: f64,
    current_y: f64,
) -> Result<JsValue, JsValue> {
    let rect = preview::map_drag(
        display_width,
        display_height,
        natural_width,
        natural_height,
        Point::new(start_x, start_y),
        Point::new(current_x, current_y),
    );
    to_js(&rect)
}

/// Map an image-space crop rectangle to display space for the overlay.
#[wasm_bindgen]
pub fn crop_to_display(
    crop: JsValue,
    display_width: f64,
    display_height: f64,
    natural_width: u32,
    natural_height: u32,
) -> Result<JsValue, JsValue> {
    let crop: CropRect = serde_wasm_bindgen::from_value(crop)
        .map_err(|e| JsValue::from_str(&format!("invalid crop rectangle: {}", e)))?;
    let rect = preview::crop_to_display(
        &crop,
        display_width,
        display_height,
        natural_width,
        natural_height,
    );
    to_js(&rect)
}

/// Preview canvas size `[width, height]` for an image in a container
/// `container_width` CSS pixels wide (0 or less when unknown).
#[wasm_bindgen]
pub fn fit_display(natural_width: u32, natural_height: u32, container_width: f64) -> Vec<f64> {
    let (width, height) = DisplayFit::default().fit(
        natural_width,
        natural_height,
        Some(container_width),
    );
    vec![width, height]
}

fn to_js(rect: &CropRect) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(rect).map_err(|e| JsValue::from_str(&e.to_string()))
}
