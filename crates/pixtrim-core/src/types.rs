//! Request and result types for the transform pipeline.
//!
//! Every type here is plain data, created per call and passed by value. The
//! serde attributes use camelCase so the objects the UI layer builds in
//! JavaScript deserialize without a translation step.

use serde::{Deserialize, Serialize};

/// A pointer position in display (on-screen canvas) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A crop rectangle in image-space pixels.
///
/// Values are real-valued: the interactive crop mapper produces fractional
/// coordinates when the preview is scaled, and they are only snapped to
/// whole pixels by the codec at draw time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle covering a whole `width x height` surface.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f64, height as f64)
    }

    /// Check whether the rectangle encloses any pixels.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Requested output size.
///
/// `None` (or 0, which is what a cleared numeric input yields) means the
/// dimension was not given. With both absent there is no resize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeRequest {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub maintain_aspect_ratio: bool,
}

impl ResizeRequest {
    /// Resize to exactly `width x height`, aspect ratio not preserved.
    pub fn exact(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            maintain_aspect_ratio: false,
        }
    }

    /// Fit inside `width x height`, aspect ratio preserved.
    pub fn fit(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            maintain_aspect_ratio: true,
        }
    }

    pub fn width_only(width: u32) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    pub fn height_only(height: u32) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }

    /// Requested width, with 0 treated as absent.
    pub fn target_width(&self) -> Option<u32> {
        self.width.filter(|w| *w > 0)
    }

    /// Requested height, with 0 treated as absent.
    pub fn target_height(&self) -> Option<u32> {
        self.height.filter(|h| *h > 0)
    }

    /// True when neither dimension is set.
    pub fn is_empty(&self) -> bool {
        self.target_width().is_none() && self.target_height().is_none()
    }
}

/// Output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    WebP,
    Avif,
    Jpeg,
    Png,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::WebP,
        OutputFormat::Avif,
        OutputFormat::Jpeg,
        OutputFormat::Png,
    ];

    /// Lowercase name, as used in requests and download file names.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::WebP => "webp",
            OutputFormat::Avif => "avif",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
        }
    }

    /// Parse a lowercase format name. `"jpg"` is accepted as an alias.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "webp" => Some(OutputFormat::WebP),
            "avif" => Some(OutputFormat::Avif),
            "jpeg" | "jpg" => Some(OutputFormat::Jpeg),
            "png" => Some(OutputFormat::Png),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowest accepted quality value.
pub const MIN_QUALITY: u8 = 1;
/// Highest accepted quality value.
pub const MAX_QUALITY: u8 = 100;
/// Quality used when the UI has not picked one.
pub const DEFAULT_QUALITY: u8 = 80;

/// Target format and quality.
///
/// Quality is always stored on a 1-100, higher-is-better scale regardless of
/// format; it is converted to the codec's native scale at encode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSettings {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_quality")]
    pub quality: u8,
}

fn default_quality() -> u8 {
    DEFAULT_QUALITY
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl ConversionSettings {
    pub fn new(format: OutputFormat, quality: u8) -> Self {
        Self { format, quality }
    }

    /// Quality clamped into 1-100.
    pub fn clamped_quality(&self) -> u8 {
        self.quality.clamp(MIN_QUALITY, MAX_QUALITY)
    }

    /// Quality as the 0.0-1.0 fraction handed to the codec.
    ///
    /// The same higher-is-better mapping applies to every format, AVIF
    /// included.
    pub fn quality_fraction(&self) -> f32 {
        self.clamped_quality() as f32 / 100.0
    }
}

/// Everything the pipeline needs to produce one output image.
///
/// Crop is applied before resize, and resize is computed against the cropped
/// size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformRequest {
    #[serde(default)]
    pub crop: Option<CropRect>,
    #[serde(default)]
    pub resize: Option<ResizeRequest>,
    #[serde(default)]
    pub conversion: ConversionSettings,
}

impl TransformRequest {
    /// A request that only re-encodes.
    pub fn convert(conversion: ConversionSettings) -> Self {
        Self {
            crop: None,
            resize: None,
            conversion,
        }
    }

    pub fn with_crop(mut self, crop: CropRect) -> Self {
        self.crop = Some(crop);
        self
    }

    pub fn with_resize(mut self, resize: ResizeRequest) -> Self {
        self.resize = Some(resize);
        self
    }
}

/// The encoded output of a successful transform.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    pub encoded_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub byte_size: u64,
    pub format: OutputFormat,
    /// Fractional size reduction versus the original, floored at 0.
    pub compression_ratio: f64,
}

impl TransformResult {
    /// MIME type of the encoded bytes.
    pub fn mime_type(&self) -> &'static str {
        self.format.profile().mime_type
    }

    /// Compression ratio as a percentage (0-100).
    pub fn compression_percent(&self) -> f64 {
        self.compression_ratio * 100.0
    }

    /// File name offered for download, e.g. `optimized-1700000000000.webp`.
    pub fn download_name(&self, timestamp_ms: u64) -> String {
        format!("optimized-{}.{}", timestamp_ms, self.format.profile().extension)
    }
}

/// Compute the fractional size reduction from `original` to `output` bytes.
///
/// A larger output yields 0, never a negative value, and so does an empty
/// original.
pub fn compression_ratio(original: u64, output: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let ratio = (original as f64 - output as f64) / original as f64;
    ratio.max(0.0)
}
