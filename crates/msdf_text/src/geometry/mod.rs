//! Geometry buffer builder
//!
//! Turns an ordered glyph placement list into the flat vertex and index
//! arrays a host 3D engine uploads to the GPU: one quad (4 vertices, 2
//! triangles) per glyph, with positions, normalized atlas UVs, per-glyph
//! quad centers, and owning-glyph ordinals. [`TextGeometry`] retains the
//! buffers between updates and overwrites them in place when the glyph
//! count is unchanged, so GPU-side storage can be reused.

pub mod buffers;
pub mod text_geometry;

pub use buffers::*;
pub use text_geometry::*;
