//! Top-level text instance
//!
//! [`MsdfText`] bundles the geometry, material parameters, and metrics
//! for one rendered text block behind a single update API. It is a plain
//! value object: a thin host adapter attaches its buffers and uniforms to
//! whatever scene-node type the target engine provides.

use crate::font::{FontAtlas, FontError};
use crate::geometry::{BoundingBox, GeometryBuffers, TextGeometry};
use crate::material::TextMaterialParams;
use crate::metrics::{
    MeasuredElement, MetricsError, MetricsOrigin, StyleOverrides, TextMetrics,
};

/// Result type for text instance operations
pub type TextResult<T> = Result<T, TextError>;

/// Errors surfaced by the text instance API
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// Font descriptor loading or lookup failed
    #[error(transparent)]
    Font(#[from] FontError),

    /// Metrics resolution failed
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// Partial update applied on top of a text instance's current state
#[derive(Debug, Clone, Default)]
pub struct TextUpdate {
    /// New text; `None` keeps the current text
    pub text: Option<String>,
    /// Style fields to override; unset fields keep their current values
    pub style: StyleOverrides,
}

/// One rendered MSDF text instance
///
/// # Example
///
/// ```no_run
/// use msdf_text::font::FontAtlas;
/// use msdf_text::metrics::StyleOverrides;
/// use msdf_text::text::MsdfText;
///
/// let font = FontAtlas::from_json_file("resources/roboto-msdf.json")?;
/// let text = MsdfText::from_explicit(
///     "hello world",
///     &StyleOverrides {
///         font_size_px: Some(32.0),
///         width_px: Some(240.0),
///         ..StyleOverrides::default()
///     },
///     &font,
/// )?;
///
/// // Hand these to the host engine:
/// let _positions = text.buffers().position_bytes();
/// let _indices = text.buffers().index_bytes();
/// let _bounds = text.bounds();
/// # Ok::<(), msdf_text::text::TextError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MsdfText {
    geometry: TextGeometry,
    material: TextMaterialParams,
    font: FontAtlas,
}

impl MsdfText {
    /// Create a text instance from an explicit string and style overrides
    pub fn from_explicit(
        text: &str,
        overrides: &StyleOverrides,
        font: &FontAtlas,
    ) -> TextResult<Self> {
        let metrics = TextMetrics::from_explicit(text, overrides)?;
        Ok(Self::from_metrics(metrics, font))
    }

    /// Create a text instance mirroring an on-screen element
    pub fn from_element(
        element: &impl MeasuredElement,
        font: &FontAtlas,
    ) -> TextResult<Self> {
        let metrics = TextMetrics::from_element(element)?;
        Ok(Self::from_metrics(metrics, font))
    }

    fn from_metrics(metrics: TextMetrics, font: &FontAtlas) -> Self {
        let material = TextMaterialParams::from_metrics(&metrics);
        let geometry = TextGeometry::new(metrics, font);
        Self {
            geometry,
            material,
            font: font.clone(),
        }
    }

    /// Apply a partial update over the current text and style
    ///
    /// On error nothing changes: the previous buffers and uniforms remain
    /// valid and displayed.
    pub fn update(&mut self, update: &TextUpdate) -> TextResult<()> {
        let current = self.geometry.metrics();
        let metrics = TextMetrics {
            text: update
                .text
                .clone()
                .unwrap_or_else(|| current.text.clone()),
            style: current.style.merged(&update.style)?,
            origin: MetricsOrigin::Explicit,
        };
        self.apply(metrics);
        Ok(())
    }

    /// Replace the text, keeping the current style
    pub fn update_text(&mut self, text: &str) {
        let metrics = self.geometry.metrics().with_text(text);
        self.apply(metrics);
    }

    /// Re-measure the on-screen element this instance mirrors and
    /// refresh geometry and uniforms from it
    pub fn sync_with_element(&mut self, element: &impl MeasuredElement) -> TextResult<()> {
        let metrics = TextMetrics::from_element(element)?;
        self.apply(metrics);
        Ok(())
    }

    fn apply(&mut self, metrics: TextMetrics) {
        self.geometry.update(metrics, &self.font);
        self.material.update(self.geometry.metrics());
    }

    /// The retained geometry
    pub fn geometry(&self) -> &TextGeometry {
        &self.geometry
    }

    /// The retained geometry, mutably (dirty-flag bookkeeping)
    pub fn geometry_mut(&mut self) -> &mut TextGeometry {
        &mut self.geometry
    }

    /// Flat buffers for GPU upload
    pub fn buffers(&self) -> &GeometryBuffers {
        self.geometry.buffers()
    }

    /// Bounds of the laid-out block
    pub fn bounds(&self) -> BoundingBox {
        self.geometry.bounds()
    }

    /// Shading uniforms
    pub fn material(&self) -> &TextMaterialParams {
        &self.material
    }

    /// Shading uniforms, mutably; edits take effect without re-layout
    pub fn material_mut(&mut self) -> &mut TextMaterialParams {
        &mut self.material
    }

    /// Metrics the current geometry was generated from
    pub fn metrics(&self) -> &TextMetrics {
        self.geometry.metrics()
    }

    /// Font this instance renders with
    pub fn font(&self) -> &FontAtlas {
        &self.font
    }
}
