//! Static lookup tables the UI renders from: per-format profiles and resize
//! presets, plus human-readable file sizes.

use serde::Serialize;

use crate::types::{OutputFormat, ResizeRequest};

/// Presentation and encoding facts about an output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatProfile {
    pub format: OutputFormat,
    /// Name shown in the format picker.
    pub label: &'static str,
    /// Label of the quality slider.
    pub quality_label: &'static str,
    pub quality_min: u8,
    pub quality_max: u8,
    pub quality_step: u8,
    /// One-line guidance shown under the slider.
    pub help: &'static str,
    pub mime_type: &'static str,
    pub extension: &'static str,
}

const WEBP: FormatProfile = FormatProfile {
    format: OutputFormat::WebP,
    label: "WebP (Recommended)",
    quality_label: "Quality (WebP)",
    quality_min: 10,
    quality_max: 100,
    quality_step: 5,
    help: "WebP provides excellent compression with wide browser support",
    mime_type: "image/webp",
    extension: "webp",
};

const AVIF: FormatProfile = FormatProfile {
    format: OutputFormat::Avif,
    label: "AVIF (Best Compression)",
    quality_label: "Quality (AVIF)",
    quality_min: 15,
    quality_max: 95,
    quality_step: 5,
    help: "AVIF offers the best compression ratio but may have limited browser support",
    mime_type: "image/avif",
    extension: "avif",
};

const JPEG: FormatProfile = FormatProfile {
    format: OutputFormat::Jpeg,
    label: "JPEG",
    quality_label: "Quality (JPEG)",
    quality_min: 10,
    quality_max: 100,
    quality_step: 5,
    help: "JPEG is ideal for photos with universal browser support",
    mime_type: "image/jpeg",
    extension: "jpeg",
};

const PNG: FormatProfile = FormatProfile {
    format: OutputFormat::Png,
    label: "PNG",
    quality_label: "Compression (PNG)",
    quality_min: 10,
    quality_max: 100,
    quality_step: 10,
    help: "PNG preserves transparency and is perfect for graphics with sharp edges",
    mime_type: "image/png",
    extension: "png",
};

impl OutputFormat {
    /// The static profile for this format.
    pub fn profile(self) -> &'static FormatProfile {
        match self {
            OutputFormat::WebP => &WEBP,
            OutputFormat::Avif => &AVIF,
            OutputFormat::Jpeg => &JPEG,
            OutputFormat::Png => &PNG,
        }
    }
}

impl FormatProfile {
    /// Snap a quality value onto this format's slider range.
    pub fn clamp_quality(&self, quality: u8) -> u8 {
        quality.clamp(self.quality_min, self.quality_max)
    }
}

/// A named fixed output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResizePreset {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl ResizePreset {
    /// Presets are exact sizes: the image is stretched to fill them.
    pub fn to_request(&self) -> ResizeRequest {
        ResizeRequest::exact(self.width, self.height)
    }
}

/// Common social and document sizes.
pub const RESIZE_PRESETS: &[ResizePreset] = &[
    ResizePreset {
        name: "Passport Photo",
        width: 350,
        height: 450,
    },
    ResizePreset {
        name: "Instagram Square",
        width: 1080,
        height: 1080,
    },
    ResizePreset {
        name: "Instagram Story",
        width: 1080,
        height: 1920,
    },
    ResizePreset {
        name: "Facebook Cover",
        width: 1200,
        height: 630,
    },
    ResizePreset {
        name: "Twitter Header",
        width: 1500,
        height: 500,
    },
    ResizePreset {
        name: "YouTube Thumbnail",
        width: 1280,
        height: 720,
    },
    ResizePreset {
        name: "LinkedIn Banner",
        width: 1584,
        height: 396,
    },
];

/// The preset whose size matches `request`, if any.
pub fn find_preset(request: &ResizeRequest) -> Option<&'static ResizePreset> {
    let (width, height) = (request.target_width()?, request.target_height()?);
    RESIZE_PRESETS
        .iter()
        .find(|p| p.width == width && p.height == height)
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Render a byte count as e.g. `512 Bytes`, `1.5 KB` or `2.25 MB`.
///
/// Base 1024, at most two decimals with trailing zeros dropped. GB is the
/// largest unit.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_format_has_profile() {
        for format in OutputFormat::ALL {
            let profile = format.profile();
            assert_eq!(profile.format, format);
            assert!(profile.mime_type.starts_with("image/"));
            assert!(profile.quality_min < profile.quality_max);
            assert!(profile.quality_step > 0);
            // Download names use the extension, requests use the name
            assert_eq!(profile.extension, format.as_str());
        }
    }

    #[test]
    fn test_avif_slider_range() {
        let profile = OutputFormat::Avif.profile();
        assert_eq!((profile.quality_min, profile.quality_max), (15, 95));
        assert_eq!(profile.clamp_quality(100), 95);
        assert_eq!(profile.clamp_quality(5), 15);
    }

    #[test]
    fn test_png_is_compression_slider() {
        let profile = OutputFormat::Png.profile();
        assert_eq!(profile.quality_label, "Compression (PNG)");
        assert_eq!(profile.quality_step, 10);
    }

    #[test]
    fn test_presets_are_exact() {
        let story = RESIZE_PRESETS
            .iter()
            .find(|p| p.name == "Instagram Story")
            .unwrap();
        let req = story.to_request();
        assert_eq!(req, ResizeRequest::exact(1080, 1920));
        assert!(!req.maintain_aspect_ratio);
    }

    #[test]
    fn test_find_preset() {
        let found = find_preset(&ResizeRequest::exact(1500, 500)).unwrap();
        assert_eq!(found.name, "Twitter Header");

        // Aspect flag does not matter, only the size
        assert!(find_preset(&ResizeRequest::fit(1080, 1080)).is_some());
        assert!(find_preset(&ResizeRequest::exact(1000, 1000)).is_none());
        assert!(find_preset(&ResizeRequest::width_only(1080)).is_none());
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2_359_296), "2.25 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }
}
