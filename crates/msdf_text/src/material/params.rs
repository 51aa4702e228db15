//! Style-derived shading parameters
//!
//! The uniform set for one text instance. Color and opacity come from the
//! text style; the distance-field controls (threshold, smooth mode,
//! stroke) are material-side knobs the host can tweak at any time.

use nalgebra::Vector3;

use crate::metrics::TextMetrics;

/// Below this font size the sharp derivative-based antialiasing aliases,
/// so the smoothstep variant is selected by default
pub const SMOOTH_FONT_SIZE_CUTOFF_PX: f32 = 20.0;

/// Default distance threshold for the smooth fill
pub const DEFAULT_THRESHOLD: f32 = 0.2;

/// Default alpha-test cutoff for fully transparent fragments
pub const DEFAULT_ALPHA_TEST: f32 = 0.01;

/// Uniforms for the distance-field text shader
///
/// All fields are read/write and take effect without a geometry rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMaterialParams {
    /// Fill color, linear RGB in [0, 1]
    pub color: Vector3<f32>,
    /// Overall opacity in [0, 1]
    pub opacity: f32,
    /// Distance threshold for the smooth fill, in [0, 1]
    pub threshold: f32,
    /// Select the smoothstep fill instead of derivative-based sharp AA
    pub is_smooth: bool,
    /// Outline color, linear RGB in [0, 1]
    pub stroke_color: Vector3<f32>,
    /// Outline width in signed-distance units; 0 disables the visible band
    pub stroke_width: f32,
    /// Discard fragments below this alpha
    pub alpha_test: f32,
    /// Render with alpha blending
    pub transparent: bool,
}

impl Default for TextMaterialParams {
    fn default() -> Self {
        Self {
            color: Vector3::new(1.0, 1.0, 1.0),
            opacity: 1.0,
            threshold: DEFAULT_THRESHOLD,
            is_smooth: false,
            stroke_color: Vector3::new(0.0, 0.0, 0.0),
            stroke_width: 0.0,
            alpha_test: DEFAULT_ALPHA_TEST,
            transparent: true,
        }
    }
}

impl TextMaterialParams {
    /// Derive the style-bound uniforms from resolved metrics
    pub fn from_metrics(metrics: &TextMetrics) -> Self {
        Self {
            color: metrics.style.color,
            opacity: metrics.style.opacity,
            is_smooth: metrics.style.font_size_px < SMOOTH_FONT_SIZE_CUTOFF_PX,
            ..Self::default()
        }
    }

    /// Refresh the style-bound uniforms after a metrics change
    ///
    /// Overwrites color, opacity, and the font-size-derived smooth mode;
    /// threshold and stroke settings are material-side state and keep
    /// whatever the host set them to.
    pub fn update(&mut self, metrics: &TextMetrics) {
        self.color = metrics.style.color;
        self.opacity = metrics.style.opacity;
        self.is_smooth = metrics.style.font_size_px < SMOOTH_FONT_SIZE_CUTOFF_PX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::StyleOverrides;

    fn metrics(font_size_px: f32) -> TextMetrics {
        TextMetrics::from_explicit(
            "hi",
            &StyleOverrides {
                font_size_px: Some(font_size_px),
                color: Some(Vector3::new(0.5, 0.25, 0.125)),
                opacity: Some(0.75),
                ..StyleOverrides::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_small_fonts_default_to_smooth() {
        assert!(TextMaterialParams::from_metrics(&metrics(16.0)).is_smooth);
        assert!(!TextMaterialParams::from_metrics(&metrics(20.0)).is_smooth);
        assert!(!TextMaterialParams::from_metrics(&metrics(48.0)).is_smooth);
    }

    #[test]
    fn test_from_metrics_takes_style_color() {
        let params = TextMaterialParams::from_metrics(&metrics(32.0));

        assert_eq!(params.color, Vector3::new(0.5, 0.25, 0.125));
        assert_eq!(params.opacity, 0.75);
        assert_eq!(params.threshold, DEFAULT_THRESHOLD);
        assert!(params.transparent);
    }

    #[test]
    fn test_update_preserves_material_side_state() {
        let mut params = TextMaterialParams::from_metrics(&metrics(32.0));
        params.threshold = 0.35;
        params.stroke_width = 0.1;
        params.stroke_color = Vector3::new(1.0, 0.0, 0.0);

        params.update(&metrics(12.0));

        assert!(params.is_smooth);
        assert_eq!(params.threshold, 0.35);
        assert_eq!(params.stroke_width, 0.1);
        assert_eq!(params.stroke_color, Vector3::new(1.0, 0.0, 0.0));
    }
}
