//! Input normalization ahead of comparison.
//!
//! The engine compares characters as given. This module produces the input
//! it expects from raw documents: ASCII letters and digits plus CJK unified
//! ideographs (U+4E00..=U+9FA5), lowercased, everything else removed, and
//! bounded in length.
//!
//! ```text
//! "Hello, World! 你好，世界。"  ->  "helloworld你好世界"
//! ```

/// Keep ASCII alphanumerics and CJK ideographs, lowercased.
///
/// ```rust
/// use papercheck::preprocess::normalize;
///
/// assert_eq!(normalize("Hello, World! 你好，世界。"), "helloworld你好世界");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|&c| c.is_ascii_alphanumeric() || ('\u{4e00}'..='\u{9fa5}').contains(&c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A normalized, length-bounded text and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    /// Normalized text, at most `max_length` characters.
    pub text: String,
    /// Characters after normalization, before truncation.
    pub original_length: usize,
    /// Whether characters were cut off the end.
    pub truncated: bool,
    /// Whether the result is shorter than `min_length`.
    pub too_short: bool,
}

/// Normalizes and bounds raw input.
///
/// ```rust
/// use papercheck::preprocess::Preprocessor;
///
/// let prepared = Preprocessor::new(5, 3).prepare("A-B-C-D-E-F-G");
/// assert_eq!(prepared.text, "abcde");
/// assert!(prepared.truncated);
/// assert!(!prepared.too_short);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preprocessor {
    max_length: usize,
    min_length: usize,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(30_000, 10)
    }
}

impl Preprocessor {
    /// Create a preprocessor bounding output to `max_length` characters and
    /// flagging output under `min_length`.
    #[must_use]
    pub const fn new(max_length: usize, min_length: usize) -> Self {
        Self {
            max_length,
            min_length,
        }
    }

    /// Normalize, then truncate.
    pub fn prepare(&self, raw: &str) -> Prepared {
        let normalized = normalize(raw);
        let original_length = normalized.chars().count();

        let (text, truncated) = if original_length > self.max_length {
            (normalized.chars().take(self.max_length).collect(), true)
        } else {
            (normalized, false)
        };
        let too_short = original_length.min(self.max_length) < self.min_length;

        Prepared {
            text,
            original_length,
            truncated,
            too_short,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_whitespace() {
        assert_eq!(normalize("a b\tc\nd.e,f!g?"), "abcdefg");
        assert_eq!(normalize("  \n "), "");
    }

    #[test]
    fn test_lowercases_ascii_only() {
        assert_eq!(normalize("ABCxyz123"), "abcxyz123");
    }

    #[test]
    fn test_drops_non_cjk_scripts() {
        // Cyrillic, accented Latin, full-width digits, kana are all removed
        assert_eq!(normalize("Привет café １２ カナ 漢字"), "caf漢字");
    }

    #[test]
    fn test_cjk_range_bounds() {
        assert_eq!(normalize("\u{4e00}\u{9fa5}\u{9fa6}\u{4dff}"), "\u{4e00}\u{9fa5}");
    }

    #[test]
    fn test_prepare_within_limits() {
        let prepared = Preprocessor::default().prepare("The quick brown fox.");
        assert_eq!(prepared.text, "thequickbrownfox");
        assert_eq!(prepared.original_length, 16);
        assert!(!prepared.truncated);
        assert!(!prepared.too_short);
    }

    #[test]
    fn test_prepare_counts_characters_not_bytes() {
        let prepared = Preprocessor::new(3, 1).prepare("你好世界");
        assert_eq!(prepared.text, "你好世");
        assert_eq!(prepared.original_length, 4);
        assert!(prepared.truncated);
    }

    #[test]
    fn test_prepare_flags_short_input() {
        let prepared = Preprocessor::default().prepare("hi!");
        assert!(prepared.too_short);
        assert!(Preprocessor::default().prepare("").too_short);
    }
}
