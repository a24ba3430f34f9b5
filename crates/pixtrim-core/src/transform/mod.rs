//! Image transformation: crop clamping, dimension resolution and the
//! crop / resize / re-encode pipeline.
//!
//! # Transform Order
//!
//! 1. Crop (clamped into the image)
//! 2. Resize, computed against the cropped size
//! 3. Encode
//!
//! Crop and resize are performed by one draw so pixels are resampled once.

mod crop;
mod pipeline;
mod resize;

pub use crop::clamp_crop;
pub use pipeline::{optimize, plan_transform, transform, TransformPlan};
pub use resize::{resolve_dimensions, round_dimensions};
