//! Text layout engine
//!
//! Consumes [`TextMetrics`](crate::metrics::TextMetrics) and a
//! [`FontAtlas`](crate::font::FontAtlas) and produces an ordered glyph
//! placement list plus the text block's bounding width and height.
//! Reproduces browser-like line-breaking semantics (greedy word wrap,
//! CSS `white-space` modes) from bitmap-font advance metrics alone.

pub mod engine;
mod tokens;

pub use engine::*;
