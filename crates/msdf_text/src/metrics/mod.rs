//! Metrics resolver
//!
//! Produces the normalized [`TextMetrics`] record that drives layout:
//! either from an explicit string plus partial style overrides, or by
//! measuring an existing on-screen element through the [`MeasuredElement`]
//! boundary trait. Both paths yield structurally identical metrics;
//! downstream stages never see which one produced them.

pub mod resolver;
pub mod style;

pub use resolver::*;
pub use style::*;

/// Result type for metrics resolution
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Errors that can occur while resolving text metrics
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Explicit mode was given no font size; every other style field has
    /// a default, font size does not
    #[error("Text style requires a font size")]
    MissingFontSize,

    /// Font size or line height is non-positive or non-finite; layout is
    /// rejected before it begins
    #[error("Degenerate text style: {0}")]
    DegenerateStyle(String),

    /// Measured mode could not read content or computed style from the
    /// referenced element
    #[error("Unable to resolve measured element: {0}")]
    ElementNotResolved(String),
}
