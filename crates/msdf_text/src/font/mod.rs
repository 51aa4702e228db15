//! Bitmap-font model
//!
//! Read-only view over an MSDF bitmap-font atlas: the serde data model for
//! the BMFont JSON descriptor and the [`FontAtlas`] lookup structure built
//! from it. Loaded once at startup, never mutated afterwards.

pub mod atlas;
pub mod descriptor;

pub use atlas::*;
pub use descriptor::*;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur while loading or querying a bitmap font
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to read the descriptor file from disk
    #[error("Failed to read font descriptor: {0}")]
    Io(#[from] std::io::Error),

    /// The descriptor file is not valid BMFont JSON
    #[error("Failed to parse font descriptor: {0}")]
    Parse(#[from] serde_json::Error),

    /// Requested character has no glyph entry in the descriptor
    #[error("Character {0:?} not found in font atlas")]
    GlyphNotFound(char),

    /// An externally loaded atlas texture does not match the descriptor's
    /// declared page size
    #[error("Atlas texture is {actual_width}x{actual_height} but descriptor declares {expected_width}x{expected_height}")]
    PageSizeMismatch {
        /// Page width declared by the descriptor
        expected_width: u32,
        /// Page height declared by the descriptor
        expected_height: u32,
        /// Width of the loaded texture
        actual_width: u32,
        /// Height of the loaded texture
        actual_height: u32,
    },
}
