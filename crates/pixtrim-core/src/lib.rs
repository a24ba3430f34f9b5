//! Pixtrim Core - client-side crop, resize and re-encode
//!
//! This crate holds everything behind Pixtrim's image tools: the geometry
//! that turns a resize/crop/format request into one draw and one encode,
//! the mapping from drag gestures on the scaled preview to image-space crop
//! rectangles, and the `image`-crate backed codec that does the pixel work.
//!
//! # Example
//!
//! ```ignore
//! use pixtrim_core::{optimize, ConversionSettings, ImageCodec, OutputFormat, ResizeRequest, TransformRequest};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let request = TransformRequest::convert(ConversionSettings::new(OutputFormat::WebP, 80))
//!     .with_resize(ResizeRequest::width_only(1200));
//! let result = optimize(&ImageCodec::new(), &bytes, &request).unwrap();
//! println!("{}x{}, {} bytes", result.width, result.height, result.byte_size);
//! ```

pub mod codec;
pub mod decode;
pub mod encode;
pub mod error;
pub mod formats;
pub mod preview;
pub mod transform;
pub mod types;

pub use codec::{ImageCodec, RasterCodec};
pub use decode::{DecodeError, FilterType, ImageSurface};
pub use encode::EncodeError;
pub use error::TransformError;
pub use formats::{find_preset, format_file_size, FormatProfile, ResizePreset, RESIZE_PRESETS};
pub use preview::{crop_to_display, map_drag, DisplayFit};
pub use transform::{optimize, plan_transform, resolve_dimensions, transform, TransformPlan};
pub use types::{
    compression_ratio, ConversionSettings, CropRect, OutputFormat, Point, ResizeRequest,
    TransformRequest, TransformResult,
};
