//! # papercheck
//!
//! Character-level overlap detection between two documents.
//!
//! ## The Problem
//!
//! Given an original text and a suspected copy, report how much of the
//! original survives in the copy as a single number in [0, 1]. The natural
//! measure is the longest common subsequence (LCS): the characters both
//! texts contain in the same order, gaps allowed.
//!
//! LCS is quadratic in time. Two 30 000-character documents need nine
//! hundred million cell updates, so exact LCS alone does not scale. This
//! crate layers cheaper machinery around it:
//!
//! ```text
//!                  compute_similarity(original, copied)
//!                               |
//!          +--------------------+---------------------+
//!          |                                          |
//!     <= 5 000 chars                             > 5 000 chars
//!       precise                                     chunked
//!          |                                          |
//!   whole-text LCS ratio                 windows of 1 500 .. 5 000 chars,
//!   + sentence matching                  precise score per window pair,
//!   blended by length                    merged weighted by window length
//!          |                                          |
//!          +------------------ Score -----------------+
//! ```
//!
//! Any LCS over a pair longer than 2 000 characters is estimated from
//! shared k-grams instead of aligned exactly.
//!
//! ## Components
//!
//! | Piece | Role |
//! |-------|------|
//! | [`SequenceMatcher`] | exact LCS in `O(min(m, n))` memory, memoized |
//! | [`approximate_lcs`] | k-gram estimate for long pairs |
//! | [`FixedChunker`] | overlapping windows covering a sequence |
//! | [`SentenceMatcher`] | per-sentence best match with staged filters |
//! | [`merge`] | weighted mean, clamped |
//! | [`SimilarityEngine`] | picks the strategy and blends |
//!
//! ## Quick Start
//!
//! ```rust
//! use papercheck::{compute_similarity, preprocess::normalize};
//!
//! let original = normalize("The quick brown fox jumps over the lazy dog.");
//! let copied = normalize("A quick brown fox jumped over a lazy dog!");
//!
//! let score = compute_similarity(&original, &copied);
//! assert!(score.value() > 0.5);
//! println!("{score}"); // two decimals
//! ```
//!
//! ## What It Is Not
//!
//! Only character sequences are compared. There is no tokenization, no
//! semantic model, and no notion of paraphrase: a faithful rewording scores
//! low, a shuffled copy of the same letters may score high.

mod aggregate;
mod approx;
mod chunk;
mod config;
mod engine;
mod error;
mod lcs;
pub mod preprocess;
mod score;
mod sentence;

pub use aggregate::{merge, merge_uniform, WeightedScores};
pub use approx::approximate_lcs;
pub use chunk::{split_into_chunks, Chunk, FixedChunker};
pub use config::{BlendWeights, ChunkTiers, LongPairMethod, SimilarityConfig};
pub use engine::{SimilarityEngine, Strategy};
pub use error::{Error, Result};
pub use lcs::{lcs_length, LcsEstimate, LcsMethod, SequenceMatcher};
pub use score::Score;
pub use sentence::{quick_similarity_check, split_sentences, Sentence, SentenceMatcher};

/// Similarity of `copied` to `original` under the default configuration.
///
/// Builds a fresh [`SimilarityEngine`] with the LCS memo disabled, since a
/// memo that lives for one call is never hit. Hold on to an engine instead
/// when comparing many pairs.
///
/// ```rust
/// use papercheck::compute_similarity;
///
/// assert_eq!(compute_similarity("the quick brown fox", "the quick brown fox").value(), 1.0);
/// assert_eq!(compute_similarity("abcdef", "xyz").value(), 0.0);
/// assert_eq!(compute_similarity("", "abc").value(), 0.0);
/// ```
pub fn compute_similarity(original: &str, copied: &str) -> Score {
    SimilarityEngine::uncached().compute_similarity(original, copied)
}
