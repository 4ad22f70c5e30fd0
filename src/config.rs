//! Similarity configuration.
//!
//! ## The Problem
//!
//! Exact LCS is quadratic. On two 2 000-character inputs that is four
//! million cell updates, fine. On two 30 000-character inputs it is nine
//! hundred million, not fine. Every constant here exists to keep the work
//! per comparison bounded while keeping the score comparable across sizes:
//!
//! ```text
//! max(len) <= 5 000        precise: whole-text LCS blended with sentences
//! max(len) <= 10 000       chunked, 1 500-char windows
//! max(len) >  10 000       chunked, 2 000 / 3 000 / 5 000-char windows
//!                          picked from the average input length
//! any pair > 2 000 chars   never exact LCS; k-gram estimate instead
//! ```
//!
//! ## Compatibility
//!
//! The numbers are empirical. They are kept as defaults so that scores stay
//! comparable with earlier runs, not because they are optimal. Change them
//! only knowing that doing so changes every reported score.

use crate::{Error, Result};

/// How to estimate LCS for a pair longer than the exact-match ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LongPairMethod {
    /// Shared k-gram count (see [`approximate_lcs`](crate::approximate_lcs)).
    #[default]
    Approximate,
    /// Exact LCS over index-aligned, ceiling-sized windows, summed.
    ///
    /// Lossy: alignments that cross window boundaries are missed.
    ChunkedExact,
}

/// Chunk sizes for the chunked strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkTiers {
    /// Used when the longer input is in `(precise_limit, long_limit]`.
    pub medium: usize,
    /// Used for long inputs whose average length is at most `large_average`.
    pub default: usize,
    /// Used when the average length exceeds `large_average`.
    pub large: usize,
    /// Used when the average length exceeds `huge_average`.
    pub huge: usize,
    /// Upper bound for the precise strategy.
    pub precise_limit: usize,
    /// Upper bound for the medium tier.
    pub long_limit: usize,
    /// Average length above which `large` applies.
    pub large_average: usize,
    /// Average length above which `huge` applies.
    pub huge_average: usize,
}

impl ChunkTiers {
    /// Smallest configured chunk size.
    #[must_use]
    pub fn smallest(&self) -> usize {
        self.medium.min(self.default).min(self.large).min(self.huge)
    }

    /// Chunk size for a long pair, given the average input length.
    #[must_use]
    pub const fn for_average(&self, average: usize) -> usize {
        if average > self.huge_average {
            self.huge
        } else if average > self.large_average {
            self.large
        } else {
            self.default
        }
    }
}

impl Default for ChunkTiers {
    fn default() -> Self {
        Self {
            medium: 1_500,
            default: 2_000,
            large: 3_000,
            huge: 5_000,
            precise_limit: 5_000,
            long_limit: 10_000,
            large_average: 20_000,
            huge_average: 50_000,
        }
    }
}

/// Weights for blending whole-text LCS with sentence similarity.
///
/// Each pair is `(whole_text, sentence)` and must sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    /// Inputs shorter than `short_below` characters.
    pub short: (f64, f64),
    /// Inputs shorter than `medium_below` characters.
    pub medium: (f64, f64),
    /// Everything longer.
    pub long: (f64, f64),
    /// Length below which `short` applies.
    pub short_below: usize,
    /// Length below which `medium` applies.
    pub medium_below: usize,
}

impl BlendWeights {
    /// The weight pair for a text of `len` characters.
    #[must_use]
    pub const fn for_length(&self, len: usize) -> (f64, f64) {
        if len < self.short_below {
            self.short
        } else if len < self.medium_below {
            self.medium
        } else {
            self.long
        }
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            short: (0.6, 0.4),
            medium: (0.4, 0.6),
            long: (0.3, 0.7),
            short_below: 100,
            medium_below: 1_000,
        }
    }
}

/// Every tunable constant of a similarity computation.
///
/// # Examples
///
/// ```rust
/// use papercheck::SimilarityConfig;
///
/// let config = SimilarityConfig::default();
/// assert_eq!(config.exact_ceiling, 2_000);
/// assert!(config.validate().is_ok());
///
/// let broken = SimilarityConfig { overlap: 1_500, ..SimilarityConfig::default() };
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityConfig {
    /// Longest input callers are expected to pass (characters).
    pub max_text_length: usize,
    /// Longest pair the exact LCS matcher is allowed to see.
    pub exact_ceiling: usize,
    /// Characters shared by adjacent chunks.
    pub overlap: usize,
    /// k-gram length for the approximate matcher.
    pub kgram_size: usize,
    /// Sentences shorter than this (after trimming) are ignored.
    pub min_sentence_length: usize,
    /// A sentence counts only if its best match exceeds this.
    pub sentence_acceptance_floor: f64,
    /// Stop searching candidates for a sentence once its best exceeds this.
    pub sentence_good_enough: f64,
    /// Stop searching copied chunks once a chunk comparison exceeds this.
    pub chunk_early_exit: f64,
    /// Minimum `min(len) / max(len)` for a sentence pair to be compared.
    pub length_ratio_gate: f64,
    /// Minimum character-overlap estimate before running LCS on sentences.
    pub prefilter_floor: f64,
    /// Copied chunks compared per original chunk.
    pub max_chunk_comparisons: usize,
    /// Entries in the exact-LCS cache; zero disables caching.
    pub cache_capacity: usize,
    /// Estimator for pairs over `exact_ceiling`.
    pub long_pair_method: LongPairMethod,
    /// Chunked strategy sizes and thresholds.
    pub chunk_tiers: ChunkTiers,
    /// Precise strategy blend.
    pub blend: BlendWeights,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            max_text_length: 30_000,
            exact_ceiling: 2_000,
            overlap: 100,
            kgram_size: 4,
            min_sentence_length: 10,
            sentence_acceptance_floor: 0.3,
            sentence_good_enough: 0.8,
            chunk_early_exit: 0.9,
            length_ratio_gate: 0.6,
            prefilter_floor: 0.3,
            max_chunk_comparisons: 5,
            cache_capacity: 256,
            long_pair_method: LongPairMethod::Approximate,
            chunk_tiers: ChunkTiers::default(),
            blend: BlendWeights::default(),
        }
    }
}

impl SimilarityConfig {
    /// Check that the configuration can be used.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: a zero chunk size, k-gram
    /// size, ceiling, comparison cap or maximum length, an overlap not smaller than every chunk size, a
    /// fraction outside [0, 1], or a blend pair that does not sum to one.
    pub fn validate(&self) -> Result<()> {
        let tiers = &self.chunk_tiers;
        for size in [tiers.medium, tiers.default, tiers.large, tiers.huge] {
            if size == 0 {
                return Err(Error::InvalidChunkSize(size));
            }
        }
        let smallest = tiers.smallest();
        if self.overlap >= smallest {
            return Err(Error::OverlapExceedsSize {
                size: smallest,
                overlap: self.overlap,
            });
        }
        if self.kgram_size == 0 {
            return Err(Error::InvalidKgramSize(self.kgram_size));
        }
        if self.exact_ceiling == 0 {
            return Err(Error::InvalidLengthCeiling(self.exact_ceiling));
        }
        if self.max_chunk_comparisons == 0 {
            return Err(Error::InvalidComparisonCap(self.max_chunk_comparisons));
        }
        if self.max_text_length == 0 {
            return Err(Error::InvalidTextLength(self.max_text_length));
        }

        let fractions = [
            ("sentence_acceptance_floor", self.sentence_acceptance_floor),
            ("sentence_good_enough", self.sentence_good_enough),
            ("chunk_early_exit", self.chunk_early_exit),
            ("length_ratio_gate", self.length_ratio_gate),
            ("prefilter_floor", self.prefilter_floor),
        ];
        for (name, value) in fractions {
            check_fraction(name, value)?;
        }

        let blends = [
            ("blend.short", self.blend.short),
            ("blend.medium", self.blend.medium),
            ("blend.long", self.blend.long),
        ];
        for (name, (whole, sentence)) in blends {
            check_fraction(name, whole)?;
            check_fraction(name, sentence)?;
            if ((whole + sentence) - 1.0).abs() > 1e-9 {
                return Err(Error::InvalidThreshold {
                    name,
                    value: whole + sentence,
                });
            }
        }
        Ok(())
    }
}

fn check_fraction(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimilarityConfig::default().validate().is_ok());
    }

    #[test]
    fn test_tier_selection() {
        let tiers = ChunkTiers::default();
        assert_eq!(tiers.for_average(12_000), 2_000);
        assert_eq!(tiers.for_average(20_001), 3_000);
        assert_eq!(tiers.for_average(50_000), 3_000);
        assert_eq!(tiers.for_average(50_001), 5_000);
    }

    #[test]
    fn test_blend_selection() {
        let blend = BlendWeights::default();
        assert_eq!(blend.for_length(99), (0.6, 0.4));
        assert_eq!(blend.for_length(100), (0.4, 0.6));
        assert_eq!(blend.for_length(999), (0.4, 0.6));
        assert_eq!(blend.for_length(1_000), (0.3, 0.7));
    }

    #[test]
    fn test_overlap_must_be_below_every_tier() {
        let config = SimilarityConfig {
            overlap: 1_500,
            ..SimilarityConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::OverlapExceedsSize {
                size: 1_500,
                overlap: 1_500
            })
        );
    }

    #[test]
    fn test_zero_sizes_rejected() {
        let mut config = SimilarityConfig::default();
        config.kgram_size = 0;
        assert_eq!(config.validate(), Err(Error::InvalidKgramSize(0)));

        let mut config = SimilarityConfig::default();
        config.chunk_tiers.large = 0;
        assert_eq!(config.validate(), Err(Error::InvalidChunkSize(0)));

        let mut config = SimilarityConfig::default();
        config.exact_ceiling = 0;
        assert_eq!(config.validate(), Err(Error::InvalidLengthCeiling(0)));
    }

    #[test]
    fn test_zero_limits_rejected() {
        let config = SimilarityConfig {
            max_chunk_comparisons: 0,
            ..SimilarityConfig::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidComparisonCap(0)));

        let config = SimilarityConfig {
            max_text_length: 0,
            ..SimilarityConfig::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidTextLength(0)));
    }

    #[test]
    fn test_fraction_out_of_range() {
        let config = SimilarityConfig {
            length_ratio_gate: 1.5,
            ..SimilarityConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidThreshold {
                name: "length_ratio_gate",
                ..
            })
        ));

        let config = SimilarityConfig {
            prefilter_floor: f64::NAN,
            ..SimilarityConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blend_must_sum_to_one() {
        let mut config = SimilarityConfig::default();
        config.blend.medium = (0.5, 0.6);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidThreshold {
                name: "blend.medium",
                ..
            })
        ));
    }
}
