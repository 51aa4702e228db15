//! BMFont JSON descriptor data model
//!
//! Serde mapping for the JSON documents produced by MSDF atlas generators
//! (`msdf-bmfont-xml` and friends): glyph rects and advances in `chars[]`,
//! pair adjustments in `kernings[]`, and atlas-wide values in `common`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::FontResult;

/// Parsed BMFont descriptor document
///
/// This is the raw, immutable data model of the descriptor file. Build a
/// [`FontAtlas`](super::FontAtlas) from it for efficient lookups.
///
/// # Example
///
/// ```no_run
/// use msdf_text::font::{BmFontDescriptor, FontAtlas};
///
/// let descriptor = BmFontDescriptor::from_json_file("resources/roboto-msdf.json")?;
/// let atlas = FontAtlas::new(descriptor);
/// # Ok::<(), msdf_text::font::FontError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmFontDescriptor {
    /// Font identity and the native size the atlas was generated at
    pub info: FontInfo,
    /// Atlas-wide line metrics and page dimensions
    pub common: FontCommon,
    /// Per-character glyph metrics
    pub chars: Vec<GlyphMetric>,
    /// Per-pair advance adjustments (absent in many fonts)
    #[serde(default)]
    pub kernings: Vec<KerningPair>,
}

/// Font identity block (`info`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontInfo {
    /// Typeface name
    #[serde(default)]
    pub face: String,
    /// Font size the atlas was rasterized at, in atlas-native pixels.
    /// All glyph metrics are expressed relative to this size.
    pub size: f32,
}

/// Atlas-wide metrics block (`common`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontCommon {
    /// Distance between baselines, in atlas-native units
    pub line_height: f32,
    /// Distance from the top of a line to the baseline, in atlas-native units
    pub base: f32,
    /// Atlas page width in pixels
    pub scale_w: u32,
    /// Atlas page height in pixels
    pub scale_h: u32,
    /// Number of atlas pages
    #[serde(default = "default_page_count")]
    pub pages: u32,
}

fn default_page_count() -> u32 {
    1
}

/// Metrics for a single glyph (`chars[]` entry)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphMetric {
    /// Character code (Unicode scalar value)
    pub id: u32,
    /// Left edge of the glyph's atlas rect, in atlas pixels
    pub x: f32,
    /// Top edge of the glyph's atlas rect, in atlas pixels
    pub y: f32,
    /// Width of the glyph's atlas rect, in atlas pixels
    pub width: f32,
    /// Height of the glyph's atlas rect, in atlas pixels
    pub height: f32,
    /// Horizontal offset from the pen position to the quad's left edge
    #[serde(default)]
    pub xoffset: f32,
    /// Vertical offset from the line top to the quad's top edge
    #[serde(default)]
    pub yoffset: f32,
    /// Horizontal pen movement after this glyph, in atlas-native units
    pub xadvance: f32,
    /// Atlas page index this glyph lives on
    #[serde(default)]
    pub page: u32,
}

impl GlyphMetric {
    /// Character this glyph renders, if `id` is a valid scalar value
    pub fn character(&self) -> Option<char> {
        char::from_u32(self.id)
    }
}

/// Kerning adjustment for an ordered character pair (`kernings[]` entry)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KerningPair {
    /// Character code of the left glyph
    pub first: u32,
    /// Character code of the right glyph
    pub second: u32,
    /// Advance adjustment in atlas-native units (usually negative)
    pub amount: f32,
}

impl BmFontDescriptor {
    /// Parse a descriptor from a BMFont JSON string
    pub fn from_json_str(json: &str) -> FontResult<Self> {
        let descriptor: Self = serde_json::from_str(json)?;
        log::debug!(
            "Parsed BMFont descriptor '{}': {} glyphs, {} kerning pairs",
            descriptor.info.face,
            descriptor.chars.len(),
            descriptor.kernings.len()
        );
        Ok(descriptor)
    }

    /// Load and parse a descriptor from a JSON file on disk
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> FontResult<Self> {
        let path_ref = path.as_ref();
        log::debug!("Loading font descriptor from: {:?}", path_ref);
        let contents = std::fs::read_to_string(path_ref)?;
        let descriptor = Self::from_json_str(&contents)?;
        log::info!(
            "Loaded font '{}' ({}px native, {}x{} atlas) from {:?}",
            descriptor.info.face,
            descriptor.info.size,
            descriptor.common.scale_w,
            descriptor.common.scale_h,
            path_ref
        );
        Ok(descriptor)
    }
}
