//! Pixtrim WASM - WebAssembly bindings for Pixtrim
//!
//! This crate exposes the pixtrim-core pipeline to the browser UI.
//!
//! # Module Structure
//!
//! - `types` - JS wrappers for surfaces and transform results
//! - `decode` - Image decoding and region drawing
//! - `transform` - The crop / resize / re-encode pipeline
//! - `crop` - Preview sizing and drag-to-crop mapping
//! - `formats` - Format profiles, resize presets and size formatting
//! - `logging` - `log` backend writing to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { optimize_image } from '@pixtrim/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = optimize_image(bytes, {
//!   resize: { width: 1200, maintainAspectRatio: true },
//!   conversion: { format: 'webp', quality: 80 },
//! });
//! const blob = new Blob([result.bytes()], { type: result.mime_type });
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod decode;
mod formats;
mod logging;
mod transform;
mod types;

pub use crop::{crop_to_display, fit_display, map_drag};
pub use decode::{decode_image, draw_region, get_orientation};
pub use formats::{find_preset, format_file_size, format_profile, format_profiles, resize_presets};
pub use logging::{init_logging, set_log_level};
pub use transform::{optimize_image, transform_image};
pub use types::{JsImageSurface, JsTransformResult};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::init_logging(logging::default_level());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Whether this build can encode AVIF.
#[wasm_bindgen]
pub fn avif_supported() -> bool {
    pixtrim_core::encode::avif_supported()
}
