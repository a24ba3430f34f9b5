//! Interactive crop preview geometry.
//!
//! # Coordinate Spaces
//!
//! - **Display space**: CSS pixels of the preview canvas, origin top-left
//! - **Image space**: pixels of the decoded (upright) image
//!
//! The UI sizes the canvas with [`DisplayFit`], feeds pointer positions to
//! [`map_drag`] on every move, and draws the overlay with
//! [`crop_to_display`].

mod fit;
mod mapper;

pub use fit::DisplayFit;
pub use mapper::{crop_to_display, map_drag};
