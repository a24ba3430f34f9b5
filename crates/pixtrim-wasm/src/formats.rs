//! Lookup table bindings for the format picker and preset menu.

use pixtrim_core::{formats, OutputFormat, ResizeRequest, RESIZE_PRESETS};
use wasm_bindgen::prelude::*;

/// Profile of one format (`webp`, `avif`, `jpeg`/`jpg`, `png`) as a plain
/// object with camelCase fields.
#[wasm_bindgen]
pub fn format_profile(format: &str) -> Result<JsValue, JsValue> {
    let format = OutputFormat::parse(format)
        .ok_or_else(|| JsValue::from_str(&format!("unknown output format: {}", format)))?;
    serde_wasm_bindgen::to_value(format.profile()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// All format profiles in picker order.
#[wasm_bindgen]
pub fn format_profiles() -> Result<JsValue, JsValue> {
    let profiles: Vec<_> = OutputFormat::ALL.iter().map(|f| f.profile()).collect();
    serde_wasm_bindgen::to_value(&profiles).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The resize presets as `{ name, width, height }` objects.
#[wasm_bindgen]
pub fn resize_presets() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(RESIZE_PRESETS).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Name of the preset matching `width x height`, if any.
#[wasm_bindgen]
pub fn find_preset(width: u32, height: u32) -> Option<String> {
    formats::find_preset(&ResizeRequest::exact(width, height)).map(|p| p.name.to_string())
}

/// Human-readable size, e.g. `1.5 KB`.
#[wasm_bindgen]
pub fn format_file_size(bytes: f64) -> String {
    formats::format_file_size(bytes.max(0.0) as u64)
}
