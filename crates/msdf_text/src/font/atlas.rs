//! Font atlas lookup structure
//!
//! [`FontAtlas`] turns a parsed [`BmFontDescriptor`] into constant-time
//! glyph and kerning lookups for the layout and geometry stages. It is a
//! pure read-only view: one atlas is safely shared by reference across
//! every text instance rendered with that font.

use std::collections::HashMap;
use std::path::Path;

use super::{BmFontDescriptor, FontError, FontResult, GlyphMetric};

/// Read-only glyph and kerning lookup for one bitmap font
#[derive(Debug, Clone)]
pub struct FontAtlas {
    face: String,
    native_size: f32,
    line_height: f32,
    base: f32,
    page_width: u32,
    page_height: u32,
    glyphs: HashMap<char, GlyphMetric>,
    kernings: HashMap<(char, char), f32>,
}

impl FontAtlas {
    /// Build the lookup tables from a parsed descriptor
    ///
    /// Glyph entries whose `id` is not a valid Unicode scalar value are
    /// dropped with a warning; kerning pairs referencing such ids are
    /// dropped silently.
    pub fn new(descriptor: BmFontDescriptor) -> Self {
        let mut glyphs = HashMap::with_capacity(descriptor.chars.len());
        for metric in &descriptor.chars {
            match metric.character() {
                Some(ch) => {
                    glyphs.insert(ch, *metric);
                }
                None => {
                    log::warn!(
                        "Dropping glyph with invalid character code {} in font '{}'",
                        metric.id,
                        descriptor.info.face
                    );
                }
            }
        }

        let mut kernings = HashMap::with_capacity(descriptor.kernings.len());
        for pair in &descriptor.kernings {
            if let (Some(first), Some(second)) =
                (char::from_u32(pair.first), char::from_u32(pair.second))
            {
                kernings.insert((first, second), pair.amount);
            }
        }

        log::info!(
            "Font atlas ready: '{}', {} glyphs, {} kerning pairs",
            descriptor.info.face,
            glyphs.len(),
            kernings.len()
        );

        Self {
            face: descriptor.info.face,
            native_size: descriptor.info.size,
            line_height: descriptor.common.line_height,
            base: descriptor.common.base,
            page_width: descriptor.common.scale_w,
            page_height: descriptor.common.scale_h,
            glyphs,
            kernings,
        }
    }

    /// Load a descriptor from a BMFont JSON file and build the atlas
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> FontResult<Self> {
        Ok(Self::new(BmFontDescriptor::from_json_file(path)?))
    }

    /// Parse a BMFont JSON string and build the atlas
    pub fn from_json_str(json: &str) -> FontResult<Self> {
        Ok(Self::new(BmFontDescriptor::from_json_str(json)?))
    }

    /// Get the glyph metrics for a character
    pub fn glyph(&self, ch: char) -> FontResult<&GlyphMetric> {
        self.glyphs.get(&ch).ok_or(FontError::GlyphNotFound(ch))
    }

    /// Kerning adjustment for an ordered glyph pair, in atlas-native units.
    /// Pairs without a descriptor entry adjust by 0.
    pub fn kerning(&self, prev: char, next: char) -> f32 {
        self.kernings.get(&(prev, next)).copied().unwrap_or(0.0)
    }

    /// Typeface name from the descriptor
    pub fn face(&self) -> &str {
        &self.face
    }

    /// Font size the atlas was generated at, in atlas-native pixels.
    /// Layout scales all glyph metrics by `font_size_px / native_size()`.
    pub fn native_size(&self) -> f32 {
        self.native_size
    }

    /// Baseline-to-baseline distance in atlas-native units
    pub fn line_height_units(&self) -> f32 {
        self.line_height
    }

    /// Line-top-to-baseline distance in atlas-native units
    pub fn base_units(&self) -> f32 {
        self.base
    }

    /// Atlas page dimensions in pixels
    pub fn page_size(&self) -> (u32, u32) {
        (self.page_width, self.page_height)
    }

    /// Number of glyphs in the atlas
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Check an externally loaded atlas texture against the descriptor's
    /// declared page size
    ///
    /// The texture itself is loaded by the host application; this only
    /// verifies that its pixel dimensions match, so that normalized UVs
    /// computed from the descriptor actually land on the right texels.
    pub fn validate_page_size(&self, width: u32, height: u32) -> FontResult<()> {
        if width == self.page_width && height == self.page_height {
            Ok(())
        } else {
            Err(FontError::PageSizeMismatch {
                expected_width: self.page_width,
                expected_height: self.page_height,
                actual_width: width,
                actual_height: height,
            })
        }
    }
}
