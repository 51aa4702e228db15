//! The two resolver entry points
//!
//! [`TextMetrics::from_explicit`] combines a string with partial style
//! overrides; [`TextMetrics::from_element`] reads the rendered content and
//! computed style of an existing on-screen element via the
//! [`MeasuredElement`] trait, keeping 3D text visually synchronized with a
//! host-rendered twin. Both produce the same schema.

use nalgebra::Vector3;

use super::{MetricsError, MetricsResult, StyleOverrides, TextStyle, WhiteSpace};

/// Which entry point produced a [`TextMetrics`] value
///
/// Informational only: the layout and geometry stages behave identically
/// for both origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsOrigin {
    /// Read from a live on-screen element
    Measured,
    /// Built from an explicit string and style overrides
    Explicit,
}

/// Normalized input contract for the layout engine
///
/// The sole interface between style resolution and layout: the layout
/// engine never inspects the original element or overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMetrics {
    /// The text to lay out
    pub text: String,
    /// Fully resolved style
    pub style: TextStyle,
    /// Which resolver path produced this record
    pub origin: MetricsOrigin,
}

/// Computed style properties read off an on-screen element
///
/// The host adapter fills this from whatever its UI layer exposes
/// (CSS computed style, widget properties, ...). Values are already in
/// pixels; the color is already parsed to linear RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    /// Computed font size in pixels
    pub font_size_px: f32,
    /// Computed line height in pixels
    pub line_height_px: f32,
    /// Computed letter spacing in pixels
    pub letter_spacing_px: f32,
    /// Rendered box width in pixels (the wrap constraint)
    pub width_px: f32,
    /// CSS `white-space` keyword as rendered
    pub white_space: String,
    /// Computed fill color, linear RGB in [0, 1]
    pub color: Vector3<f32>,
    /// Computed opacity in [0, 1]
    pub opacity: f32,
}

/// Host boundary for measured mode
///
/// Implemented by a thin adapter over the host's on-screen node type.
/// Returning `None` from either method means the element could not be
/// resolved; the resolver turns that into a hard
/// [`MetricsError::ElementNotResolved`] rather than degenerate metrics.
pub trait MeasuredElement {
    /// The element's rendered text content
    fn text_content(&self) -> Option<String>;
    /// The element's computed style properties
    fn computed_style(&self) -> Option<ComputedStyle>;
}

impl TextMetrics {
    /// Explicit mode: combine a string with partial style overrides
    ///
    /// # Example
    ///
    /// ```
    /// use msdf_text::metrics::{StyleOverrides, TextMetrics};
    ///
    /// let metrics = TextMetrics::from_explicit(
    ///     "hello world",
    ///     &StyleOverrides {
    ///         font_size_px: Some(32.0),
    ///         ..StyleOverrides::default()
    ///     },
    /// )?;
    /// assert_eq!(metrics.style.line_height_px, 38.4);
    /// # Ok::<(), msdf_text::metrics::MetricsError>(())
    /// ```
    pub fn from_explicit(
        text: impl Into<String>,
        overrides: &StyleOverrides,
    ) -> MetricsResult<Self> {
        Ok(Self {
            text: text.into(),
            style: TextStyle::resolve(overrides)?,
            origin: MetricsOrigin::Explicit,
        })
    }

    /// Measured mode: read content and computed style off a live element
    ///
    /// An unknown `white-space` keyword falls back to `normal` with a
    /// warning; failure to resolve the element at all is a hard error.
    pub fn from_element(element: &impl MeasuredElement) -> MetricsResult<Self> {
        let text = element.text_content().ok_or_else(|| {
            MetricsError::ElementNotResolved("element has no text content".to_string())
        })?;
        let computed = element.computed_style().ok_or_else(|| {
            MetricsError::ElementNotResolved("element has no computed style".to_string())
        })?;

        let white_space = computed.white_space.parse().unwrap_or_else(|_| {
            log::warn!(
                "Unknown white-space keyword '{}', falling back to normal",
                computed.white_space
            );
            WhiteSpace::Normal
        });

        let style = TextStyle {
            font_size_px: computed.font_size_px,
            line_height_px: computed.line_height_px,
            letter_spacing_px: computed.letter_spacing_px,
            width_px: computed.width_px,
            white_space,
            color: computed.color,
            opacity: computed.opacity,
        };
        style.validate()?;

        Ok(Self {
            text,
            style,
            origin: MetricsOrigin::Measured,
        })
    }

    /// Same style, new text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: self.style.clone(),
            origin: self.origin,
        }
    }
}
