//! Preview canvas sizing.
//!
//! The crop preview is drawn no wider than its container (minus padding),
//! a fixed maximum, or the image itself, and keeps the image's aspect ratio.
//! The resulting size is the display size handed to [`map_drag`].
//!
//! [`map_drag`]: super::map_drag

use serde::{Deserialize, Serialize};

/// Sizing rules for the crop preview canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayFit {
    /// Widest the canvas may be, in CSS pixels.
    pub max_width: f64,
    /// Horizontal padding subtracted from the container width.
    pub container_padding: f64,
    /// Container width assumed when the UI cannot measure one.
    pub fallback_container_width: f64,
}

impl Default for DisplayFit {
    fn default() -> Self {
        Self {
            max_width: 600.0,
            container_padding: 32.0,
            fallback_container_width: 400.0,
        }
    }
}

impl DisplayFit {
    /// Display size for a `natural_width x natural_height` image in a
    /// container `container_width` pixels wide.
    ///
    /// A missing or non-positive container width uses the fallback. Images
    /// are never scaled up. Returns `(0.0, 0.0)` for an empty image.
    pub fn fit(
        &self,
        natural_width: u32,
        natural_height: u32,
        container_width: Option<f64>,
    ) -> (f64, f64) {
        if natural_width == 0 || natural_height == 0 {
            return (0.0, 0.0);
        }

        let container = container_width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(self.fallback_container_width);
        let max_width = (container - self.container_padding).min(self.max_width);

        let width = max_width.min(natural_width as f64).max(1.0);
        let height = width * (natural_height as f64 / natural_width as f64);
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_image_capped_at_max() {
        let fit = DisplayFit::default();
        assert_eq!(fit.fit(4000, 3000, Some(1200.0)), (600.0, 450.0));
    }

    #[test]
    fn test_narrow_container() {
        let fit = DisplayFit::default();
        assert_eq!(fit.fit(1000, 500, Some(332.0)), (300.0, 150.0));
    }

    #[test]
    fn test_small_image_not_upscaled() {
        let fit = DisplayFit::default();
        assert_eq!(fit.fit(200, 100, Some(1200.0)), (200.0, 100.0));
    }

    #[test]
    fn test_fallback_container() {
        let fit = DisplayFit::default();
        // 400 - 32 = 368
        assert_eq!(fit.fit(1000, 1000, None), (368.0, 368.0));
        assert_eq!(fit.fit(1000, 1000, Some(0.0)), (368.0, 368.0));
    }

    #[test]
    fn test_empty_image() {
        assert_eq!(DisplayFit::default().fit(0, 100, Some(800.0)), (0.0, 0.0));
    }

    #[test]
    fn test_custom_rules() {
        let fit = DisplayFit {
            max_width: 1000.0,
            container_padding: 0.0,
            fallback_container_width: 400.0,
        };
        assert_eq!(fit.fit(2000, 1000, Some(800.0)), (800.0, 400.0));
    }
}
