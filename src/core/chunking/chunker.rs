//! UTF-8 safe overlapping text chunking.
//!
//! Splits a text into fixed-size windows measured in **characters**.
//! Each window after the first re-includes the last `overlap`
//! characters of the previous one, so a passage that straddles a
//! boundary still appears whole in at least one chunk when it is no
//! longer than the overlap.
//!
//! Chunk boundaries are computed from `char_indices()`, so slicing
//! never lands inside a multi-byte character.
//!
//! # Example
//!
//! ```
//! use studyrag::core::chunking::Chunker;
//!
//! let chunker = Chunker::new(4, 1).unwrap();
//! let chunks = chunker.chunk_text("ABCDEFGHIJ");
//!
//! let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
//! assert_eq!(texts, ["ABCD", "DEFG", "GHIJ"]);
//! assert_eq!(chunks.last().unwrap().end, 10);
//! ```

use crate::core::error::{RagError, Result};
use crate::core::types::TextChunk;

/// Default window length in characters
pub const DEFAULT_CHUNK_SIZE: usize = 5000;

/// Default number of characters shared by consecutive windows
pub const DEFAULT_OVERLAP: usize = 200;

/// Overlapping fixed-window text chunker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    /// Number of characters per chunk
    chunk_size: usize,

    /// Number of characters re-included from the previous chunk
    overlap: usize,
}

impl Chunker {
    /// Create a new chunker.
    ///
    /// `overlap` may be equal to or larger than `chunk_size`; in that
    /// case consecutive chunks are laid end to end instead of
    /// overlapping.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidArgument`] if `chunk_size` is 0.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(RagError::InvalidArgument(
                "chunk_size must be > 0".to_string(),
            ));
        }

        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Get the chunk size in characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the overlap in characters.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Chunk text into overlapping windows.
    ///
    /// Returns an empty vector for empty input. Otherwise the first
    /// chunk starts at 0, the last chunk ends at the character length
    /// of `text`, and every chunk starts at or before the end of the
    /// previous one.
    pub fn chunk_text(&self, text: &str) -> Vec<TextChunk> {
        let char_indices: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
        let len = char_indices.len();

        let byte_at = |char_idx: usize| -> usize {
            if char_idx < len {
                char_indices[char_idx]
            } else {
                text.len()
            }
        };

        let mut chunks = Vec::new();
        let mut start = 0;

        while start < len {
            let end = (start + self.chunk_size).min(len);

            chunks.push(TextChunk {
                text: text[byte_at(start)..byte_at(end)].to_string(),
                index: chunks.len(),
                start,
                end,
            });

            if end >= len {
                break;
            }

            // The next window must begin strictly after this one, or
            // an overlap >= chunk_size would loop forever
            let next = end.saturating_sub(self.overlap);
            start = if next > start { next } else { end };
        }

        chunks
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

/// Chunk `text` with an ad-hoc window size and overlap.
///
/// # Errors
///
/// Returns [`RagError::InvalidArgument`] if `chunk_size` is 0.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<TextChunk>> {
    Ok(Chunker::new(chunk_size, overlap)?.chunk_text(text))
}
