//! The raster codec capability the pipeline orchestrates.
//!
//! The pipeline never touches pixels itself; it asks a [`RasterCodec`] to
//! decode bytes, draw a region at a new size, and encode the result.
//! [`ImageCodec`] is the implementation backed by the `image` crate.

use crate::decode::{self, DecodeError, FilterType, ImageSurface};
use crate::encode::{self, EncodeError, DEFAULT_AVIF_SPEED};
use crate::types::{CropRect, OutputFormat};

/// Decode, resample and encode raster images.
pub trait RasterCodec {
    /// Decode image bytes into a surface.
    fn decode(&self, bytes: &[u8]) -> Result<ImageSurface, DecodeError>;

    /// Render `region` (image-space, possibly fractional) of `surface`
    /// scaled to exactly `width x height`.
    fn draw(
        &self,
        surface: &ImageSurface,
        region: &CropRect,
        width: u32,
        height: u32,
    ) -> Result<ImageSurface, DecodeError>;

    /// Encode a surface in `format` at a 0.0-1.0 quality fraction.
    fn encode(
        &self,
        surface: &ImageSurface,
        format: OutputFormat,
        quality: f32,
    ) -> Result<Vec<u8>, EncodeError>;
}

/// [`RasterCodec`] implemented with the `image` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCodec {
    filter: FilterType,
    avif_speed: u8,
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self {
            filter: FilterType::default(),
            avif_speed: DEFAULT_AVIF_SPEED,
        }
    }
}

impl ImageCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `filter` for every draw.
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// AVIF encoder speed, 1 (slowest) to 10 (fastest).
    pub fn with_avif_speed(mut self, speed: u8) -> Self {
        self.avif_speed = speed.clamp(1, 10);
        self
    }

    pub fn filter(&self) -> FilterType {
        self.filter
    }

    pub fn avif_speed(&self) -> u8 {
        self.avif_speed
    }
}

impl RasterCodec for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<ImageSurface, DecodeError> {
        decode::decode_image(bytes)
    }

    fn draw(
        &self,
        surface: &ImageSurface,
        region: &CropRect,
        width: u32,
        height: u32,
    ) -> Result<ImageSurface, DecodeError> {
        decode::draw_region(surface, region, width, height, self.filter)
    }

    fn encode(
        &self,
        surface: &ImageSurface,
        format: OutputFormat,
        quality: f32,
    ) -> Result<Vec<u8>, EncodeError> {
        encode::encode_surface(surface, format, quality, self.avif_speed)
    }
}
