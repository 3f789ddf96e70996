//! UTF-8 safe overlapping text chunking.
//!
//! Windows are measured in **characters**, not bytes, and every
//! boundary is taken from `char_indices()`, so multi-byte input
//! (emoji, CJK, accented text) never splits a character.
//!
//! # Example
//!
//! ```
//! use ragdex::core::indexer::Chunker;
//!
//! let chunker = Chunker::new(10, 2);
//! let windows = chunker.split("0123456789ABCDEFGHIJ");
//! assert_eq!(windows, vec!["0123456789", "89ABCDEFGH", "GHIJ"]);
//! ```

/// Default window width in characters
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Default number of characters shared by consecutive windows
pub const DEFAULT_OVERLAP: usize = 50;

/// Fixed-width sliding window chunker.
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    /// Number of characters per chunk
    chunk_size: usize,

    /// Number of characters to overlap between consecutive chunks
    overlap: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP)
    }
}

impl Chunker {
    /// Create a new chunker with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is 0 or if `overlap >= chunk_size`.
    /// Configuration validation rejects both before a chunker is
    /// built from user input.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be > 0");
        assert!(overlap < chunk_size, "overlap must be < chunk_size");

        Self {
            chunk_size,
            overlap,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Distance in characters between the starts of consecutive windows
    pub fn stride(&self) -> usize {
        self.chunk_size - self.overlap
    }

    /// Split text into overlapping windows.
    ///
    /// Text no longer than `chunk_size` characters comes back as a
    /// single window (an empty string yields one empty window).
    /// Otherwise windows start at multiples of the stride and the
    /// last window is the first one that reaches the end of the
    /// text, so it may be shorter than `chunk_size`.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let char_indices: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
        let char_len = char_indices.len();

        if char_len <= self.chunk_size {
            return vec![text];
        }

        // Byte offset of the character at position `i`, or end of text
        let byte_at = |i: usize| char_indices.get(i).copied().unwrap_or(text.len());

        let mut windows = Vec::with_capacity(self.expected_count(char_len));
        let mut start = 0;

        loop {
            let end = (start + self.chunk_size).min(char_len);
            windows.push(&text[byte_at(start)..byte_at(end)]);

            if end >= char_len {
                break;
            }
            start += self.stride();
        }

        windows
    }

    /// Number of windows `split` produces for a text of `char_len` characters
    pub fn expected_count(&self, char_len: usize) -> usize {
        if char_len <= self.chunk_size {
            1
        } else {
            (char_len - self.overlap).div_ceil(self.stride())
        }
    }
}
