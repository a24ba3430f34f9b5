//! Image decoding and region drawing for Pixtrim.
//!
//! This module provides functionality for:
//! - Decoding image bytes (JPEG, PNG, WebP, ...) into an upright RGBA surface
//! - Drawing a sub-region of a surface at a new size in a single resample pass
//!
//! # Architecture
//!
//! The decoding pipeline is designed to be used from Web Workers via WASM bindings.
//! All operations are synchronous and single-threaded within WASM.

mod draw;
mod reader;
mod types;

pub use draw::{draw_region, fits_output_limit, PixelRegion, MAX_OUTPUT_PIXELS};
pub use reader::{decode_image, get_orientation};
pub use types::{DecodeError, FilterType, ImageSurface, Orientation};
