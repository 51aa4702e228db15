//! Flat vertex and index arrays for glyph quads
//!
//! Buffer layout per glyph quad, vertices ordered top-left, top-right,
//! bottom-left, bottom-right:
//!
//! - `positions`: 4 vertices x 3 floats
//! - `uvs`: 4 vertices x 2 floats, atlas rect normalized to page size
//! - `centers`: 4 vertices x 2 floats, the quad center replicated (used
//!   downstream for edge-aware antialiasing)
//! - `glyph_indices`: 4 x owning-glyph ordinal (enables per-glyph effects)
//! - `indices`: triangles `(0,1,2),(2,1,3)` offset by `4 x ordinal`
//!   (counter-clockwise seen from -Z, matching the engine convention for
//!   camera-facing quads)

use crate::font::FontAtlas;
use crate::layout::GlyphPlacement;

/// The five flat arrays handed to the renderer for one text block
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryBuffers {
    positions: Vec<f32>,
    uvs: Vec<f32>,
    centers: Vec<f32>,
    glyph_indices: Vec<u32>,
    indices: Vec<u32>,
    glyph_count: usize,
}

impl GeometryBuffers {
    /// Number of glyph quads these buffers hold
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    /// Vertex positions, `12 x glyph_count` floats
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Vertex UVs, `8 x glyph_count` floats
    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    /// Per-vertex quad centers, `8 x glyph_count` floats
    pub fn centers(&self) -> &[f32] {
        &self.centers
    }

    /// Per-vertex owning-glyph ordinals, `4 x glyph_count` entries
    pub fn glyph_indices(&self) -> &[u32] {
        &self.glyph_indices
    }

    /// Triangle indices, `6 x glyph_count` entries
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Positions as raw bytes for GPU upload
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// UVs as raw bytes for GPU upload
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Centers as raw bytes for GPU upload
    pub fn center_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.centers)
    }

    /// Glyph ordinals as raw bytes for GPU upload
    pub fn glyph_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.glyph_indices)
    }

    /// Triangle indices as raw bytes for GPU upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Overwrite positions, UVs, and centers in place from freshly built
    /// buffers of the same glyph count
    ///
    /// The index and glyph-ordinal arrays are left untouched: with an
    /// unchanged glyph count they are identical by construction. Calling
    /// this with a mismatched count is a programming error in the caller's
    /// reuse check, not a recoverable condition.
    pub(crate) fn copy_attributes_from(&mut self, fresh: &Self) {
        assert_eq!(
            self.glyph_count, fresh.glyph_count,
            "in-place geometry update requires an identical glyph count"
        );
        self.positions.copy_from_slice(&fresh.positions);
        self.uvs.copy_from_slice(&fresh.uvs);
        self.centers.copy_from_slice(&fresh.centers);
    }
}

/// Build geometry attribute arrays for a glyph placement list
///
/// `flip_y` inverts the V axis of the atlas UVs, for hosts that sample
/// textures with the origin at the bottom-left.
pub fn build_geometry_attributes(
    glyphs: &[GlyphPlacement],
    font: &FontAtlas,
    flip_y: bool,
) -> GeometryBuffers {
    let n = glyphs.len();
    let mut positions = Vec::with_capacity(12 * n);
    let mut uvs = Vec::with_capacity(8 * n);
    let mut centers = Vec::with_capacity(8 * n);
    let mut glyph_indices = Vec::with_capacity(4 * n);
    let mut indices = Vec::with_capacity(6 * n);

    let (page_w, page_h) = font.page_size();
    let (page_w, page_h) = (page_w as f32, page_h as f32);

    for (ordinal, glyph) in glyphs.iter().enumerate() {
        let left = glyph.x;
        let right = glyph.x + glyph.width;
        let top = glyph.y;
        let bottom = glyph.y - glyph.height;

        positions.extend_from_slice(&[
            left, top, 0.0, //
            right, top, 0.0, //
            left, bottom, 0.0, //
            right, bottom, 0.0,
        ]);

        let rect = &glyph.atlas_rect;
        let u0 = rect.x / page_w;
        let u1 = (rect.x + rect.width) / page_w;
        let mut v0 = rect.y / page_h;
        let mut v1 = (rect.y + rect.height) / page_h;
        if flip_y {
            v0 = 1.0 - v0;
            v1 = 1.0 - v1;
        }
        uvs.extend_from_slice(&[u0, v0, u1, v0, u0, v1, u1, v1]);

        let cx = glyph.x + glyph.width * 0.5;
        let cy = glyph.y - glyph.height * 0.5;
        centers.extend_from_slice(&[cx, cy, cx, cy, cx, cy, cx, cy]);

        glyph_indices.extend_from_slice(&[ordinal as u32; 4]);

        let base = (4 * ordinal) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    GeometryBuffers {
        positions,
        uvs,
        centers,
        glyph_indices,
        indices,
        glyph_count: n,
    }
}
