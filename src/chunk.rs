//! Fixed-size chunking with overlap over character sequences.
//!
//! Quadratic matching on two long texts is only tractable if each side is
//! cut into windows first. Windows overlap so that a copied passage sitting
//! on a boundary still lands whole in at least one window.
//!
//! ## How It Works
//!
//! ```text
//! size = 10, overlap = 3
//!
//! Sequence: "abcdefghijklmnopqrstuvwxyz"
//!
//! Chunk 0: "abcdefghij"   [0..10]
//! Chunk 1: "hijklmnopq"   [7..17]   <- starts at 10 - 3 = 7
//! Chunk 2: "opqrstuvwx"   [14..24]  <- starts at 17 - 3 = 14
//! Chunk 3: "vwxyz"        [21..26]  <- final chunk ends at the sequence end
//! ```
//!
//! Offsets are character indices, not bytes: inputs are `&[char]`, so a
//! window can never split a multi-byte character.
//!
//! The loop stops as soon as a chunk reaches the end of the sequence, so
//! there is never a trailing chunk that lies entirely inside its
//! predecessor.

use std::fmt;

/// A window over a character sequence.
///
/// Borrowed from the sequence it was cut from; chunks live only as long as
/// the comparison that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// The characters in this window.
    pub text: &'a [char],
    /// Character offset where this chunk starts.
    pub start: usize,
    /// Character offset where this chunk ends (exclusive).
    pub end: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Chunk<'_> {
    /// Length in characters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the chunk is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The character span of this chunk in the source sequence.
    #[must_use]
    pub const fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Chunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, span: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.len()
        )
    }
}

/// Fixed-size chunker with configurable overlap.
///
/// ## Example
///
/// ```rust
/// use papercheck::FixedChunker;
///
/// let text: Vec<char> = "a".repeat(250).chars().collect();
/// let chunks = FixedChunker::new(100, 20).chunk(&text);
///
/// // starts at 0, 80, 160; the third chunk reaches 250 and ends the loop
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[1].start, 80);
/// assert_eq!(chunks[2].end, 250);
/// ```
#[derive(Debug, Clone)]
pub struct FixedChunker {
    size: usize,
    overlap: usize,
}

impl FixedChunker {
    /// Create a new fixed-size chunker.
    ///
    /// # Arguments
    ///
    /// * `size` - Maximum chunk size in characters
    /// * `overlap` - Characters shared by adjacent chunks
    ///
    /// # Panics
    ///
    /// Panics if `size == 0` or `overlap >= size`.
    #[must_use]
    pub fn new(size: usize, overlap: usize) -> Self {
        assert!(size > 0, "chunk size must be > 0");
        assert!(overlap < size, "overlap must be < size");
        Self { size, overlap }
    }

    /// Create a chunker with no overlap.
    #[must_use]
    pub fn no_overlap(size: usize) -> Self {
        Self::new(size, 0)
    }

    /// The step size between chunk starts.
    const fn step(&self) -> usize {
        self.size - self.overlap
    }

    /// Split `text` into overlapping windows covering it completely.
    pub fn chunk<'a>(&self, text: &'a [char]) -> Vec<Chunk<'a>> {
        if text.is_empty() {
            return vec![];
        }

        let mut chunks = Vec::with_capacity(self.estimate_chunks(text.len()));
        let mut start = 0;

        loop {
            let end = (start + self.size).min(text.len());
            chunks.push(Chunk {
                text: &text[start..end],
                start,
                end,
                index: chunks.len(),
            });

            if end == text.len() {
                break;
            }
            start += self.step();
        }

        chunks
    }

    /// Number of chunks [`chunk`](Self::chunk) produces for `text_len` characters.
    #[must_use]
    pub fn estimate_chunks(&self, text_len: usize) -> usize {
        if text_len == 0 {
            return 0;
        }
        if text_len <= self.size {
            return 1;
        }
        1 + (text_len - self.size).div_ceil(self.step())
    }
}

/// Split `text` into windows of `chunk_size` characters sharing `overlap`
/// characters with their predecessor.
///
/// # Panics
///
/// Panics if `chunk_size == 0` or `overlap >= chunk_size`.
pub fn split_into_chunks(text: &[char], chunk_size: usize, overlap: usize) -> Vec<Chunk<'_>> {
    FixedChunker::new(chunk_size, overlap).chunk(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_basic_chunking() {
        let text = chars("abcdefghijklmnopqrstuvwxyz");
        let chunks = FixedChunker::new(10, 2).chunk(&text);

        assert_eq!(chunks[0].text, &text[..10]);
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[0].end, 10);
        assert_eq!(chunks[1].start, 8); // 10 - 2 overlap
        assert_eq!(chunks.last().map(|c| c.end), Some(26));
    }

    #[test]
    fn test_empty_text() {
        assert!(FixedChunker::new(10, 2).chunk(&[]).is_empty());
    }

    #[test]
    fn test_text_smaller_than_chunk() {
        let text = chars("small");
        let chunks = FixedChunker::new(100, 20).chunk(&text);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].span(), 0..5);
    }

    #[test]
    fn test_exact_fit_has_no_trailing_chunk() {
        let text = chars("abcdefghij");
        let chunks = FixedChunker::new(10, 3).chunk(&text);
        assert_eq!(chunks.len(), 1);

        // second window is 7..17 and ends exactly at the end
        let text: Vec<char> = "x".repeat(17).chars().collect();
        let chunks = FixedChunker::new(10, 3).chunk(&text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].span(), 7..17);
    }

    #[test]
    fn test_multibyte_characters() {
        let text = chars("日本語の文章を分割する");
        let chunks = split_into_chunks(&text, 4, 1);
        assert_eq!(chunks[0].text, &text[..4]);
        assert_eq!(chunks[1].start, 3);
        assert_eq!(chunks.last().map(|c| c.end), Some(text.len()));
    }

    #[test]
    fn test_estimate_matches_actual() {
        let chunker = FixedChunker::new(10, 3);
        for len in 0..60 {
            let text: Vec<char> = "q".repeat(len).chars().collect();
            assert_eq!(chunker.estimate_chunks(len), chunker.chunk(&text).len(), "len {len}");
        }
    }

    #[test]
    fn test_display() {
        let text = chars("abcdef");
        let chunks = FixedChunker::no_overlap(4).chunk(&text);
        assert_eq!(
            chunks[1].to_string(),
            "Chunk { index: 1, span: 4..6, len: 2 }"
        );
    }

    #[test]
    #[should_panic]
    fn test_zero_size_panics() {
        let _ = FixedChunker::new(0, 0);
    }

    #[test]
    #[should_panic]
    fn test_overlap_exceeds_size_panics() {
        let _ = split_into_chunks(&['a'], 10, 10);
    }
}
