//! Text style parameters
//!
//! CSS-like style set applied to a whole text block: font size, line
//! height, letter spacing, wrap width, white-space mode, color, opacity.
//! One immutable [`TextStyle`] per layout call; partial inputs resolve
//! through [`StyleOverrides`].

use std::str::FromStr;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::{MetricsError, MetricsResult};

/// Line height default as a multiple of font size
pub const DEFAULT_LINE_HEIGHT_FACTOR: f32 = 1.2;

/// White-space handling mode, following the CSS property of the same name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhiteSpace {
    /// Collapse whitespace runs to single spaces; wrap at space boundaries
    #[default]
    Normal,
    /// Preserve all whitespace verbatim; `\n` breaks lines; never auto-wrap
    Pre,
    /// Collapse whitespace as `normal` but never auto-wrap
    Nowrap,
}

impl FromStr for WhiteSpace {
    type Err = MetricsError;

    /// Parse a CSS `white-space` keyword. `pre-wrap` and `pre-line` are
    /// not supported as distinct modes and map to the closest one here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(Self::Normal),
            "pre" | "pre-wrap" => Ok(Self::Pre),
            "nowrap" => Ok(Self::Nowrap),
            other => Err(MetricsError::DegenerateStyle(format!(
                "unknown white-space keyword '{other}'"
            ))),
        }
    }
}

/// Fully resolved style for one text block
///
/// Every field is required; partial inputs are filled in by
/// [`TextStyle::resolve`]. Immutable for the duration of a layout call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Target font size in pixels
    pub font_size_px: f32,
    /// Baseline-to-baseline distance in pixels
    pub line_height_px: f32,
    /// Extra horizontal spacing between adjacent glyphs, in pixels
    pub letter_spacing_px: f32,
    /// Wrap constraint in pixels; `f32::INFINITY` disables wrapping
    pub width_px: f32,
    /// White-space handling mode
    pub white_space: WhiteSpace,
    /// Fill color, linear RGB in [0, 1]
    pub color: Vector3<f32>,
    /// Overall opacity in [0, 1]
    pub opacity: f32,
}

/// Partial style input; unset fields take documented defaults
///
/// `font_size_px` is the one field without a default: resolution fails
/// with [`MetricsError::MissingFontSize`] when it is unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    /// Target font size in pixels (required)
    pub font_size_px: Option<f32>,
    /// Line height in pixels; defaults to `1.2 × font_size_px`
    pub line_height_px: Option<f32>,
    /// Letter spacing in pixels; defaults to 0
    pub letter_spacing_px: Option<f32>,
    /// Wrap width in pixels; defaults to unconstrained
    pub width_px: Option<f32>,
    /// White-space mode; defaults to [`WhiteSpace::Normal`]
    pub white_space: Option<WhiteSpace>,
    /// Fill color; defaults to white
    pub color: Option<Vector3<f32>>,
    /// Opacity; defaults to 1
    pub opacity: Option<f32>,
}

impl TextStyle {
    /// Resolve a partial style into a full one, applying defaults
    pub fn resolve(overrides: &StyleOverrides) -> MetricsResult<Self> {
        let font_size_px = overrides
            .font_size_px
            .ok_or(MetricsError::MissingFontSize)?;

        let style = Self {
            font_size_px,
            line_height_px: overrides
                .line_height_px
                .unwrap_or(DEFAULT_LINE_HEIGHT_FACTOR * font_size_px),
            letter_spacing_px: overrides.letter_spacing_px.unwrap_or(0.0),
            width_px: overrides.width_px.unwrap_or(f32::INFINITY),
            white_space: overrides.white_space.unwrap_or_default(),
            color: overrides.color.unwrap_or_else(|| Vector3::new(1.0, 1.0, 1.0)),
            opacity: overrides.opacity.unwrap_or(1.0),
        };
        style.validate()?;
        Ok(style)
    }

    /// Apply overrides on top of this already-resolved style
    ///
    /// Unset fields keep their current resolved values; in particular a
    /// font-size change does not re-derive the line height.
    pub fn merged(&self, overrides: &StyleOverrides) -> MetricsResult<Self> {
        let style = Self {
            font_size_px: overrides.font_size_px.unwrap_or(self.font_size_px),
            line_height_px: overrides.line_height_px.unwrap_or(self.line_height_px),
            letter_spacing_px: overrides
                .letter_spacing_px
                .unwrap_or(self.letter_spacing_px),
            width_px: overrides.width_px.unwrap_or(self.width_px),
            white_space: overrides.white_space.unwrap_or(self.white_space),
            color: overrides.color.unwrap_or(self.color),
            opacity: overrides.opacity.unwrap_or(self.opacity),
        };
        style.validate()?;
        Ok(style)
    }

    /// Reject styles no layout can be produced for
    pub fn validate(&self) -> MetricsResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(MetricsError::DegenerateStyle(format!(
                "font size must be positive, got {}",
                self.font_size_px
            )));
        }
        if self.line_height_px.is_nan() || self.line_height_px <= 0.0 {
            return Err(MetricsError::DegenerateStyle(format!(
                "line height must be positive, got {}",
                self.line_height_px
            )));
        }
        Ok(())
    }
}
