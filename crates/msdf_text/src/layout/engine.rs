//! Line breaking and glyph placement
//!
//! `layout_text` is a pure function: identical `(metrics, font)` inputs
//! always yield the identical glyph list and bounding box. Characters
//! without a glyph in the font are skipped with a zero-width fallback and
//! never abort the layout.
//!
//! Kerning and letter spacing are both applied as a pre-advance before
//! every glyph after the first on a line. This means no trailing letter
//! spacing after a line's last glyph, and kerning never acts across a
//! line break.

use crate::font::FontAtlas;
use crate::metrics::{TextMetrics, WhiteSpace};

use super::tokens::{tokenize, Token};

/// Pixel rectangle of one glyph inside the atlas texture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRect {
    /// Left edge in atlas pixels
    pub x: f32,
    /// Top edge in atlas pixels
    pub y: f32,
    /// Width in atlas pixels
    pub width: f32,
    /// Height in atlas pixels
    pub height: f32,
}

/// One placed glyph, in logical order
///
/// The position is the quad's top-left corner in the text block's
/// top-left-anchored frame: x grows rightward, y grows upward, so every
/// placed glyph has `y <= 0` and lines stack downward in -Y. Glyph
/// offsets are already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPlacement {
    /// Character this placement renders
    pub ch: char,
    /// Left edge of the quad in pixels
    pub x: f32,
    /// Top edge of the quad in pixels
    pub y: f32,
    /// Quad width in pixels
    pub width: f32,
    /// Quad height in pixels
    pub height: f32,
    /// Pen advance this glyph contributed, in pixels
    pub advance: f32,
    /// Where to sample this glyph in the atlas
    pub atlas_rect: AtlasRect,
}

/// Result of laying out one text block
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Placed glyphs in logical order, trailing line whitespace excluded
    pub glyphs: Vec<GlyphPlacement>,
    /// Widest line's advance width in pixels
    pub width: f32,
    /// `line_count x line_height_px` in pixels
    pub height: f32,
    /// Number of lines, counting empty forced lines in `pre` mode
    pub line_count: usize,
}

/// Lay out a text block: line breaking plus per-glyph placement
///
/// Wrapping is greedy: as many whole words as fit are packed onto each
/// line, and a word is never split. A single word wider than the wrap
/// constraint is placed on its own line and overflows.
pub fn layout_text(metrics: &TextMetrics, font: &FontAtlas) -> TextBlock {
    let style = &metrics.style;
    let scale = style.font_size_px / font.native_size();
    let lines = break_lines(metrics, font, scale);

    let mut glyphs = Vec::new();
    let mut max_width = 0.0f32;

    for (line_index, line) in lines.iter().enumerate() {
        let line_top = -(line_index as f32) * style.line_height_px;
        let mut pen = 0.0f32;
        let mut prev: Option<char> = None;

        for &ch in line {
            let Ok(metric) = font.glyph(ch) else {
                // Skip the glyph, advance the pen by the fallback width of 0
                log::debug!(
                    "Skipping character {:?}: no glyph in font '{}'",
                    ch,
                    font.face()
                );
                continue;
            };
            if let Some(p) = prev {
                pen += style.letter_spacing_px + font.kerning(p, ch) * scale;
            }
            glyphs.push(GlyphPlacement {
                ch,
                x: pen + metric.xoffset * scale,
                y: line_top - metric.yoffset * scale,
                width: metric.width * scale,
                height: metric.height * scale,
                advance: metric.xadvance * scale,
                atlas_rect: AtlasRect {
                    x: metric.x,
                    y: metric.y,
                    width: metric.width,
                    height: metric.height,
                },
            });
            pen += metric.xadvance * scale;
            prev = Some(ch);
        }
        max_width = max_width.max(pen);
    }

    log::trace!(
        "Laid out {} glyphs over {} lines ({}x{} px)",
        glyphs.len(),
        lines.len(),
        max_width,
        lines.len() as f32 * style.line_height_px
    );

    TextBlock {
        glyphs,
        width: max_width,
        height: lines.len() as f32 * style.line_height_px,
        line_count: lines.len(),
    }
}

/// Split the text into lines of characters according to `white_space`
///
/// In collapsing modes, lines never carry leading or trailing spaces:
/// a wrap point consumes the space that separated the words, so that
/// space still counts toward the break decision but is never placed.
fn break_lines(metrics: &TextMetrics, font: &FontAtlas, scale: f32) -> Vec<Vec<char>> {
    let style = &metrics.style;
    let tokens = tokenize(&metrics.text, style.white_space);
    let preserving = style.white_space == WhiteSpace::Pre;
    let wrap = style.white_space == WhiteSpace::Normal && style.width_px.is_finite();
    let saw_tokens = !tokens.is_empty();

    let mut lines: Vec<Vec<char>> = Vec::new();
    let mut current: Vec<char> = Vec::new();

    for token in tokens {
        match token {
            Token::Newline => lines.push(std::mem::take(&mut current)),
            Token::Space => {
                if preserving {
                    current.push(' ');
                }
                // Collapsing modes join words below; a bare space token
                // never starts or ends a line there
            }
            Token::Word(word) => {
                if preserving || current.is_empty() {
                    current.extend(word.chars());
                } else {
                    let mut candidate = current.clone();
                    candidate.push(' ');
                    candidate.extend(word.chars());
                    let candidate_width =
                        measure_chars(&candidate, font, scale, style.letter_spacing_px);
                    if wrap && candidate_width > style.width_px {
                        lines.push(std::mem::take(&mut current));
                        current = word.chars().collect();
                    } else {
                        current = candidate;
                    }
                }
            }
        }
    }

    // An explicit trailing newline in pre mode leaves an empty final line;
    // collapsing modes only count lines that ended up with content
    if preserving {
        if saw_tokens {
            lines.push(current);
        }
    } else if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Advance width of a character run, mirroring the placement pen exactly
/// (including the zero-width skip for missing glyphs)
fn measure_chars(chars: &[char], font: &FontAtlas, scale: f32, letter_spacing_px: f32) -> f32 {
    let mut pen = 0.0f32;
    let mut prev: Option<char> = None;
    for &ch in chars {
        let Ok(metric) = font.glyph(ch) else {
            continue;
        };
        if let Some(p) = prev {
            pen += letter_spacing_px + font.kerning(p, ch) * scale;
        }
        pen += metric.xadvance * scale;
        prev = Some(ch);
    }
    pen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{BmFontDescriptor, FontCommon, FontInfo, GlyphMetric, KerningPair};
    use crate::metrics::StyleOverrides;
    use approx::assert_relative_eq;

    const NATIVE_SIZE: f32 = 32.0;

    /// Font with the given per-character advances; rects are arbitrary
    /// but deterministic
    fn test_font(advances: &[(char, f32)], kernings: &[(char, char, f32)]) -> FontAtlas {
        let chars = advances
            .iter()
            .enumerate()
            .map(|(i, &(ch, advance))| GlyphMetric {
                id: ch as u32,
                x: (i as f32) * 16.0,
                y: 0.0,
                width: 8.0,
                height: 10.0,
                xoffset: 0.0,
                yoffset: 2.0,
                xadvance: advance,
                page: 0,
            })
            .collect();
        let kernings = kernings
            .iter()
            .map(|&(first, second, amount)| KerningPair {
                first: first as u32,
                second: second as u32,
                amount,
            })
            .collect();
        FontAtlas::new(BmFontDescriptor {
            info: FontInfo {
                face: "Test".to_string(),
                size: NATIVE_SIZE,
            },
            common: FontCommon {
                line_height: 40.0,
                base: 31.0,
                scale_w: 256,
                scale_h: 256,
                pages: 1,
            },
            chars,
            kernings,
        })
    }

    /// Uniform-advance font covering lowercase letters and space
    fn uniform_font(advance: f32) -> FontAtlas {
        let mut advances: Vec<(char, f32)> = ('a'..='z').map(|ch| (ch, advance)).collect();
        advances.push((' ', advance));
        test_font(&advances, &[])
    }

    fn metrics(text: &str, overrides: StyleOverrides) -> TextMetrics {
        TextMetrics::from_explicit(text, &overrides).unwrap()
    }

    fn style_32() -> StyleOverrides {
        StyleOverrides {
            font_size_px: Some(NATIVE_SIZE),
            ..StyleOverrides::default()
        }
    }

    #[test]
    fn test_unconstrained_text_is_one_line() {
        let font = uniform_font(10.0);
        let block = layout_text(&metrics("hello world again", style_32()), &font);

        assert_eq!(block.line_count, 1);
        assert_relative_eq!(block.height, 1.2 * NATIVE_SIZE);
        // All glyphs on the baseline-top of line zero
        assert!(block.glyphs.iter().all(|g| g.y == -2.0));
    }

    #[test]
    fn test_letter_spacing_scenario() {
        // 'A'{advance:10}, 'B'{advance:12}, spacing 2 => B at x=12, width 24
        let font = test_font(&[('A', 10.0), ('B', 12.0)], &[]);
        let block = layout_text(
            &metrics(
                "AB",
                StyleOverrides {
                    letter_spacing_px: Some(2.0),
                    ..style_32()
                },
            ),
            &font,
        );

        assert_eq!(block.glyphs.len(), 2);
        assert_relative_eq!(block.glyphs[1].x, 12.0);
        assert_relative_eq!(block.width, 24.0);
    }

    #[test]
    fn test_kerning_shifts_the_pen() {
        let font = test_font(&[('A', 10.0), ('V', 12.0)], &[('A', 'V', -3.0)]);
        let block = layout_text(&metrics("AV", style_32()), &font);

        assert_relative_eq!(block.glyphs[1].x, 7.0);
        assert_relative_eq!(block.width, 19.0);
    }

    #[test]
    fn test_kerning_scales_with_font_size() {
        let font = test_font(&[('A', 10.0), ('V', 12.0)], &[('A', 'V', -3.0)]);
        let block = layout_text(
            &metrics(
                "AV",
                StyleOverrides {
                    font_size_px: Some(NATIVE_SIZE / 2.0),
                    ..StyleOverrides::default()
                },
            ),
            &font,
        );

        assert_relative_eq!(block.glyphs[1].x, 3.5);
        assert_relative_eq!(block.width, 9.5);
    }

    #[test]
    fn test_greedy_wrap_hello_world() {
        let font = uniform_font(10.0);
        // "hello world" measures 110; narrower than that but wider than
        // "hello" (50) forces exactly one break
        let block = layout_text(
            &metrics(
                "hello world",
                StyleOverrides {
                    width_px: Some(100.0),
                    ..style_32()
                },
            ),
            &font,
        );

        assert_eq!(block.line_count, 2);
        // The separating space is consumed by the wrap, not placed
        assert_eq!(block.glyphs.len(), 10);
        assert_relative_eq!(block.width, 50.0);
        assert_relative_eq!(block.height, 2.0 * 1.2 * NATIVE_SIZE);

        // "world" starts flush left on the second line
        let w = &block.glyphs[5];
        assert_eq!(w.ch, 'w');
        assert_relative_eq!(w.x, 0.0);
        assert_relative_eq!(w.y, -(1.2 * NATIVE_SIZE) - 2.0);
    }

    #[test]
    fn test_interior_spaces_are_placed() {
        let font = uniform_font(10.0);
        let block = layout_text(&metrics("a b", style_32()), &font);

        assert_eq!(block.glyphs.len(), 3);
        assert_eq!(block.glyphs[1].ch, ' ');
        assert_relative_eq!(block.width, 30.0);
    }

    #[test]
    fn test_pre_honors_newlines_and_never_wraps() {
        let font = uniform_font(10.0);
        let block = layout_text(
            &metrics(
                "aa bb\ncc",
                StyleOverrides {
                    white_space: Some(WhiteSpace::Pre),
                    width_px: Some(15.0),
                    ..style_32()
                },
            ),
            &font,
        );

        assert_eq!(block.line_count, 2);
        // First line keeps its space and overflows the width constraint
        assert_eq!(block.glyphs.len(), 7);
        assert_relative_eq!(block.width, 50.0);
    }

    #[test]
    fn test_pre_trailing_newline_adds_an_empty_line() {
        let font = uniform_font(10.0);
        let block = layout_text(
            &metrics(
                "aa\n",
                StyleOverrides {
                    white_space: Some(WhiteSpace::Pre),
                    ..style_32()
                },
            ),
            &font,
        );

        assert_eq!(block.line_count, 2);
        assert_eq!(block.glyphs.len(), 2);
    }

    #[test]
    fn test_nowrap_overflows_the_constraint() {
        let font = uniform_font(10.0);
        let block = layout_text(
            &metrics(
                "aa  bb",
                StyleOverrides {
                    white_space: Some(WhiteSpace::Nowrap),
                    width_px: Some(15.0),
                    ..style_32()
                },
            ),
            &font,
        );

        assert_eq!(block.line_count, 1);
        // Whitespace run collapsed to one space
        assert_eq!(block.glyphs.len(), 5);
        assert!(block.width > 15.0);
    }

    #[test]
    fn test_overlong_word_is_not_split() {
        let font = uniform_font(10.0);
        let block = layout_text(
            &metrics(
                "xx abcdef",
                StyleOverrides {
                    width_px: Some(30.0),
                    ..style_32()
                },
            ),
            &font,
        );

        assert_eq!(block.line_count, 2);
        // Second line is the whole word, overflowing the constraint
        assert_relative_eq!(block.width, 60.0);
        assert!(block.width > 30.0);
    }

    #[test]
    fn test_missing_glyph_is_skipped_without_error() {
        let font = uniform_font(10.0);
        let block = layout_text(&metrics("a\u{1F600}b", style_32()), &font);

        assert_eq!(block.glyphs.len(), 2);
        // The emoji contributes a fallback advance of 0
        assert_relative_eq!(block.glyphs[1].x, 10.0);
    }

    #[test]
    fn test_empty_text_is_an_empty_block() {
        let font = uniform_font(10.0);
        let block = layout_text(&metrics("", style_32()), &font);

        assert!(block.glyphs.is_empty());
        assert_eq!(block.line_count, 0);
        assert_eq!(block.width, 0.0);
        assert_eq!(block.height, 0.0);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let font = uniform_font(10.0);
        let m = metrics(
            "hello world wrap me",
            StyleOverrides {
                width_px: Some(80.0),
                letter_spacing_px: Some(1.0),
                ..style_32()
            },
        );

        let first = layout_text(&m, &font);
        let second = layout_text(&m, &font);
        assert_eq!(first, second);
    }
}
