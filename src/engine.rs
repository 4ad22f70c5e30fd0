//! Strategy selection and score blending.
//!
//! ## Decision
//!
//! One decision per call, nothing persisted:
//!
//! ```text
//! either empty                     -> 0.0
//! identical                        -> 1.0
//! max(len) <= 5 000                -> precise
//! max(len) <= 10 000               -> chunked, size 1 500
//! otherwise                        -> chunked, size from average length
//!                                     (2 000 / 3 000 above 20k / 5 000 above 50k)
//! ```
//!
//! ## Precise
//!
//! ```text
//! overall  = LCS(original, copied) / len(original)
//! sentence = SentenceMatcher::similarity(original, copied)
//! score    = w_overall * overall + w_sentence * sentence
//! ```
//!
//! The weights shift toward sentences as the text grows: a short snippet has
//! too few sentences for the average to mean much, a long one has too many
//! coincidental character matches for raw LCS to mean much.
//!
//! ## Chunked
//!
//! Both sides are windowed. Each original window takes the best precise
//! score among the first few copied windows, stopping early on a near
//! match; the window scores are merged weighted by window length.
//!
//! Every LCS goes through [`SequenceMatcher::estimate`], so no pair larger
//! than the exact-match ceiling is ever aligned exactly.

use tracing::{debug, trace, warn};

use crate::aggregate::WeightedScores;
use crate::chunk::FixedChunker;
use crate::lcs::SequenceMatcher;
use crate::sentence::SentenceMatcher;
use crate::{Result, Score, SimilarityConfig};

/// The computation path chosen for a pair of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// At least one input is empty.
    Empty,
    /// Inputs are identical.
    Identical,
    /// Whole-text LCS blended with sentence similarity.
    Precise,
    /// Windowed comparison with the given chunk size.
    Chunked {
        /// Characters per window.
        chunk_size: usize,
    },
}

/// Computes similarity scores under one configuration.
///
/// Owns its LCS memo; reuse one engine across calls to benefit from it.
///
/// ```rust
/// use papercheck::{SimilarityConfig, SimilarityEngine};
///
/// let engine = SimilarityEngine::new(SimilarityConfig::default())?;
/// let score = engine.compute_similarity("the quick brown fox", "the quick brown fox");
/// assert_eq!(score.to_string(), "1.00");
/// # Ok::<(), papercheck::Error>(())
/// ```
#[derive(Debug)]
pub struct SimilarityEngine {
    config: SimilarityConfig,
    sequences: SequenceMatcher,
    sentences: SentenceMatcher,
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::build(SimilarityConfig::default())
    }
}

impl SimilarityEngine {
    /// Create an engine.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`SimilarityConfig::validate`].
    pub fn new(config: SimilarityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Default configuration with the LCS memo disabled, for one-shot use.
    pub(crate) fn uncached() -> Self {
        Self::build(SimilarityConfig {
            cache_capacity: 0,
            ..SimilarityConfig::default()
        })
    }

    fn build(config: SimilarityConfig) -> Self {
        let sequences = SequenceMatcher::new(
            config.exact_ceiling,
            config.kgram_size,
            config.cache_capacity,
        )
        .with_long_pair_method(config.long_pair_method);
        let sentences = SentenceMatcher::from_config(&config);
        Self {
            config,
            sequences,
            sentences,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// The LCS matcher, including its memo.
    #[must_use]
    pub const fn sequences(&self) -> &SequenceMatcher {
        &self.sequences
    }

    /// Similarity of `copied` to `original`, in [0, 1].
    ///
    /// Deterministic for identical inputs.
    pub fn compute_similarity(&self, original: &str, copied: &str) -> Score {
        let original: Vec<char> = original.chars().collect();
        let copied: Vec<char> = copied.chars().collect();
        self.compare(&original, &copied)
    }

    /// [`compute_similarity`](Self::compute_similarity) on character slices.
    pub fn compare(&self, original: &[char], copied: &[char]) -> Score {
        let longest = original.len().max(copied.len());
        if longest > self.config.max_text_length {
            warn!(
                len = longest,
                max = self.config.max_text_length,
                "input exceeds configured maximum length"
            );
        }

        let strategy = self.select_strategy(original, copied);
        debug!(
            len_original = original.len(),
            len_copied = copied.len(),
            ?strategy,
            "selected strategy"
        );

        match strategy {
            Strategy::Empty => Score::ZERO,
            Strategy::Identical => Score::ONE,
            Strategy::Precise => self.precise(original, copied),
            Strategy::Chunked { chunk_size } => self.chunked(original, copied, chunk_size),
        }
    }

    /// Which path [`compare`](Self::compare) takes for these inputs.
    pub fn select_strategy(&self, original: &[char], copied: &[char]) -> Strategy {
        if original.is_empty() || copied.is_empty() {
            return Strategy::Empty;
        }
        if original == copied {
            return Strategy::Identical;
        }

        let tiers = &self.config.chunk_tiers;
        let longest = original.len().max(copied.len());
        if longest <= tiers.precise_limit {
            Strategy::Precise
        } else if longest <= tiers.long_limit {
            Strategy::Chunked {
                chunk_size: tiers.medium,
            }
        } else {
            let average = (original.len() + copied.len()) / 2;
            Strategy::Chunked {
                chunk_size: tiers.for_average(average),
            }
        }
    }

    /// Sentence-level similarity on its own.
    pub fn sentence_similarity(&self, original: &str, copied: &str) -> Score {
        let original: Vec<char> = original.chars().collect();
        let copied: Vec<char> = copied.chars().collect();
        self.sentences
            .similarity(&original, &copied, |a, b| self.sequences.estimate(a, b).length)
    }

    fn precise(&self, original: &[char], copied: &[char]) -> Score {
        let estimate = self.sequences.estimate(original, copied);
        let overall = Score::ratio(estimate.length, original.len());
        let sentence = self
            .sentences
            .similarity(original, copied, |a, b| self.sequences.estimate(a, b).length);

        let (w_overall, w_sentence) = self.config.blend.for_length(original.len());
        trace!(
            overall = overall.value(),
            sentence = sentence.value(),
            method = ?estimate.method,
            "precise blend"
        );
        Score::new(w_overall * overall.value() + w_sentence * sentence.value())
    }

    fn chunked(&self, original: &[char], copied: &[char], chunk_size: usize) -> Score {
        let chunker = FixedChunker::new(chunk_size, self.config.overlap);
        let originals = chunker.chunk(original);
        let candidates = chunker.chunk(copied);
        debug!(
            chunk_size,
            original_chunks = originals.len(),
            copied_chunks = candidates.len(),
            "chunked comparison"
        );

        let mut weighted = WeightedScores::with_capacity(originals.len());
        for chunk in &originals {
            let mut best = Score::ZERO;
            for candidate in candidates.iter().take(self.config.max_chunk_comparisons) {
                let score = self.chunk_pair(chunk.text, candidate.text);
                if score > best {
                    best = score;
                }
                if best.value() > self.config.chunk_early_exit {
                    break;
                }
            }
            trace!(index = chunk.index, best = best.value(), "chunk best match");
            weighted.push(best, chunk.len() as f64);
        }

        weighted.merge()
    }

    fn chunk_pair(&self, a: &[char], b: &[char]) -> Score {
        if a == b {
            Score::ONE
        } else {
            self.precise(a, b)
        }
    }
}
