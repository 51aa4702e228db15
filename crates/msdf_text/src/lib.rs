//! # MSDF Text
//!
//! Text layout and GPU geometry generation for multi-channel
//! signed-distance-field (MSDF) bitmap fonts. Glyphs stay crisp across
//! scale and can be outlined and antialiased analytically in a shader
//! instead of being rasterized per font size.
//!
//! The pipeline is a chain of pure value transformations:
//!
//! 1. **Font model** ([`font`]): read-only glyph metrics and kerning from
//!    a BMFont JSON atlas descriptor.
//! 2. **Metrics resolver** ([`metrics`]): normalize a text string plus a
//!    CSS-like style set into [`metrics::TextMetrics`], either from
//!    explicit values or by measuring an on-screen element.
//! 3. **Layout engine** ([`layout`]): browser-like line breaking and
//!    per-glyph placement from advance metrics alone.
//! 4. **Geometry builder** ([`geometry`]): flat vertex and index arrays
//!    per glyph quad, with in-place reuse when the glyph count is
//!    unchanged.
//! 5. **Shading model** ([`material`]): style-derived uniforms and the
//!    per-pixel MSDF coverage math the host's fragment stage evaluates.
//!
//! Scene-graph attachment, texture loading, and the render loop belong to
//! the host engine; [`text::MsdfText`] is the value object a thin adapter
//! wraps.
//!
//! ## Quick Start
//!
//! ```no_run
//! use msdf_text::prelude::*;
//!
//! let font = FontAtlas::from_json_file("resources/roboto-msdf.json")?;
//!
//! let mut text = MsdfText::from_explicit(
//!     "hello world",
//!     &StyleOverrides {
//!         font_size_px: Some(32.0),
//!         width_px: Some(240.0),
//!         ..StyleOverrides::default()
//!     },
//!     &font,
//! )?;
//!
//! // Upload text.buffers() and set text.material() uniforms, then:
//! text.update_text("hello again");
//! if text.geometry().needs_upload() {
//!     // re-upload the (possibly in-place updated) buffers
//! }
//! # Ok::<(), msdf_text::text::TextError>(())
//! ```

pub mod font;
pub mod geometry;
pub mod layout;
pub mod material;
pub mod metrics;
pub mod text;

pub use text::{MsdfText, TextError, TextResult, TextUpdate};

/// Common imports for crate users
pub mod prelude {
    pub use crate::font::{BmFontDescriptor, FontAtlas, FontError};
    pub use crate::geometry::{
        build_geometry_attributes, BoundingBox, GeometryBuffers, TextGeometry,
    };
    pub use crate::layout::{layout_text, GlyphPlacement, TextBlock};
    pub use crate::material::{shade, TextMaterialParams};
    pub use crate::metrics::{
        ComputedStyle, MeasuredElement, MetricsError, StyleOverrides, TextMetrics, TextStyle,
        WhiteSpace,
    };
    pub use crate::text::{MsdfText, TextError, TextResult, TextUpdate};
}
