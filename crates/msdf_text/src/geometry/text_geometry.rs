//! Retained text geometry with incremental updates
//!
//! [`TextGeometry`] owns the geometry buffers for one rendered text
//! instance and re-derives them whenever the metrics change. When the
//! glyph count is unchanged the existing arrays are overwritten in place
//! and flagged dirty for re-upload, so the host can keep its GPU-side
//! storage; otherwise the arrays are replaced wholesale, index buffer
//! included.

use nalgebra::Vector3;

use crate::font::FontAtlas;
use crate::layout::layout_text;
use crate::metrics::{MeasuredElement, MetricsResult, TextMetrics};

use super::{build_geometry_attributes, GeometryBuffers};

/// Whether atlas V coordinates are flipped for sampling. MSDF atlases are
/// authored top-down while the target engines sample bottom-up.
const FLIP_ATLAS_V: bool = true;

/// Axis-aligned bounds of a text block
///
/// Text is anchored at the top-left origin, so the box always spans
/// `(0, -height, 0)` to `(width, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Vector3<f32>,
    /// Maximum corner
    pub max: Vector3<f32>,
}

impl BoundingBox {
    /// Width of the box
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the box
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Geometry for one rendered text instance
#[derive(Debug, Clone)]
pub struct TextGeometry {
    buffers: GeometryBuffers,
    bounds: BoundingBox,
    metrics: TextMetrics,
    attributes_dirty: bool,
    buffers_replaced: bool,
}

impl TextGeometry {
    /// Lay out the text and build fresh geometry buffers
    pub fn new(metrics: TextMetrics, font: &FontAtlas) -> Self {
        let block = layout_text(&metrics, font);
        let buffers = build_geometry_attributes(&block.glyphs, font, FLIP_ATLAS_V);
        log::debug!(
            "Built text geometry: {} glyphs, {} lines, {}x{} px",
            buffers.glyph_count(),
            block.line_count,
            block.width,
            block.height
        );
        Self {
            buffers,
            bounds: Self::bounds_for(block.width, block.height),
            metrics,
            attributes_dirty: true,
            buffers_replaced: true,
        }
    }

    /// Re-layout with new metrics, reusing the buffers when possible
    ///
    /// With an unchanged glyph count only the position, UV, and center
    /// contents change; the arrays keep their identity and the index
    /// buffer is untouched. A changed glyph count replaces every array.
    pub fn update(&mut self, metrics: TextMetrics, font: &FontAtlas) {
        let block = layout_text(&metrics, font);
        let fresh = build_geometry_attributes(&block.glyphs, font, FLIP_ATLAS_V);

        if fresh.glyph_count() == self.buffers.glyph_count() {
            self.buffers.copy_attributes_from(&fresh);
            log::debug!(
                "Updated text geometry in place ({} glyphs)",
                self.buffers.glyph_count()
            );
        } else {
            log::debug!(
                "Reallocated text geometry buffers ({} -> {} glyphs)",
                self.buffers.glyph_count(),
                fresh.glyph_count()
            );
            self.buffers = fresh;
            self.buffers_replaced = true;
        }

        self.attributes_dirty = true;
        self.bounds = Self::bounds_for(block.width, block.height);
        self.metrics = metrics;
    }

    /// Re-layout with new text, keeping the current style
    pub fn update_text(&mut self, text: &str, font: &FontAtlas) {
        let metrics = self.metrics.with_text(text);
        self.update(metrics, font);
    }

    /// Re-measure an on-screen element and re-layout from it
    ///
    /// On error the current buffers are left untouched and stay valid.
    pub fn update_from_element(
        &mut self,
        element: &impl MeasuredElement,
        font: &FontAtlas,
    ) -> MetricsResult<()> {
        let metrics = TextMetrics::from_element(element)?;
        self.update(metrics, font);
        Ok(())
    }

    /// The flat attribute and index arrays for GPU upload
    pub fn buffers(&self) -> &GeometryBuffers {
        &self.buffers
    }

    /// Bounds of the laid-out text block
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Metrics the current buffers were generated from
    pub fn metrics(&self) -> &TextMetrics {
        &self.metrics
    }

    /// Widest line's width in pixels
    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    /// Total block height in pixels
    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    /// True while attribute contents await re-upload
    pub fn needs_upload(&self) -> bool {
        self.attributes_dirty
    }

    /// True when the arrays (index buffer included) were replaced since
    /// the last upload, so GPU-side storage must be reallocated
    pub fn buffers_replaced(&self) -> bool {
        self.buffers_replaced
    }

    /// Clear the dirty flags once the host has uploaded the buffers
    pub fn mark_uploaded(&mut self) {
        self.attributes_dirty = false;
        self.buffers_replaced = false;
    }

    fn bounds_for(width: f32, height: f32) -> BoundingBox {
        BoundingBox {
            min: Vector3::new(0.0, -height, 0.0),
            max: Vector3::new(width, 0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{BmFontDescriptor, FontCommon, FontInfo, GlyphMetric};
    use crate::metrics::StyleOverrides;
    use approx::assert_relative_eq;

    fn test_font() -> FontAtlas {
        let chars = ('a'..='z')
            .chain(std::iter::once(' '))
            .enumerate()
            .map(|(i, ch)| GlyphMetric {
                id: ch as u32,
                x: (i as f32) * 16.0,
                y: 0.0,
                width: 8.0,
                height: 10.0,
                xoffset: 0.0,
                yoffset: 2.0,
                xadvance: 10.0,
                page: 0,
            })
            .collect();
        FontAtlas::new(BmFontDescriptor {
            info: FontInfo {
                face: "Test".to_string(),
                size: 32.0,
            },
            common: FontCommon {
                line_height: 40.0,
                base: 31.0,
                scale_w: 512,
                scale_h: 512,
                pages: 1,
            },
            chars,
            kernings: vec![],
        })
    }

    fn metrics(text: &str) -> TextMetrics {
        TextMetrics::from_explicit(
            text,
            &StyleOverrides {
                font_size_px: Some(32.0),
                ..StyleOverrides::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_bounds_anchor_at_top_left() {
        let font = test_font();
        let geometry = TextGeometry::new(metrics("abc"), &font);

        assert_relative_eq!(geometry.width(), 30.0);
        assert_relative_eq!(geometry.height(), 38.4);
        assert_eq!(geometry.bounds().max, Vector3::new(30.0, 0.0, 0.0));
        assert_eq!(geometry.bounds().min, Vector3::new(0.0, -38.4, 0.0));
    }

    #[test]
    fn test_same_glyph_count_updates_in_place() {
        let font = test_font();
        let mut geometry = TextGeometry::new(metrics("abc"), &font);
        geometry.mark_uploaded();

        let positions_ptr = geometry.buffers().positions().as_ptr();
        let indices_ptr = geometry.buffers().indices().as_ptr();

        geometry.update(metrics("xyz"), &font);

        // Same backing arrays, refreshed contents
        assert_eq!(geometry.buffers().positions().as_ptr(), positions_ptr);
        assert_eq!(geometry.buffers().indices().as_ptr(), indices_ptr);
        assert!(geometry.needs_upload());
        assert!(!geometry.buffers_replaced());
    }

    #[test]
    fn test_changed_glyph_count_replaces_buffers() {
        let font = test_font();
        let mut geometry = TextGeometry::new(metrics("abc"), &font);
        geometry.mark_uploaded();

        let positions_ptr = geometry.buffers().positions().as_ptr();

        geometry.update(metrics("abcd"), &font);

        assert_ne!(geometry.buffers().positions().as_ptr(), positions_ptr);
        assert_eq!(geometry.buffers().glyph_count(), 4);
        assert!(geometry.needs_upload());
        assert!(geometry.buffers_replaced());
    }

    #[test]
    fn test_update_is_idempotent() {
        let font = test_font();
        let mut geometry = TextGeometry::new(metrics("abc def"), &font);

        geometry.update(metrics("abc def"), &font);
        let first = geometry.buffers().clone();
        geometry.update(metrics("abc def"), &font);

        assert_eq!(geometry.buffers(), &first);
    }

    #[test]
    fn test_update_text_keeps_style() {
        let font = test_font();
        let mut geometry = TextGeometry::new(metrics("abc"), &font);

        geometry.update_text("wxyz", &font);

        assert_eq!(geometry.metrics().text, "wxyz");
        assert_eq!(geometry.metrics().style, metrics("abc").style);
        assert_eq!(geometry.buffers().glyph_count(), 4);
    }

    #[test]
    fn test_uv_direction_is_flipped_for_sampling() {
        // Atlas rects are authored top-down; with the V flip the first
        // vertex row (quad top) must carry the larger V value
        let font = test_font();
        let geometry = TextGeometry::new(metrics("a"), &font);

        let uvs = geometry.buffers().uvs();
        assert!(uvs[1] > uvs[5]);
    }
}
