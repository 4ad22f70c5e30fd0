//! Weighted merging of partial scores.
//!
//! Chunk scores are weighted by chunk length, so a short trailing chunk
//! cannot drag the result as far as a full one:
//!
//! ```text
//! chunk   len    best    weight
//! 0       2000   0.90    2000 / 4500
//! 1       2000   0.80    2000 / 4500
//! 2        500   0.10     500 / 4500
//!
//! merged = 0.90 * 0.444 + 0.80 * 0.444 + 0.10 * 0.111 = 0.767
//! ```

use crate::Score;

/// Weighted mean of `scores`, weights normalized to sum to one.
///
/// Returns zero for an empty list or a zero total weight. The result is
/// clamped into [0, 1].
///
/// ```rust
/// use papercheck::{merge, Score};
///
/// let merged = merge(&[Score::new(1.0), Score::new(0.0)], &[3.0, 1.0]);
/// assert_eq!(merged.value(), 0.75);
/// assert_eq!(merge(&[], &[]), Score::ZERO);
/// ```
///
/// # Panics
///
/// Panics if the slices differ in length or a weight is negative or not
/// finite.
pub fn merge(scores: &[Score], weights: &[f64]) -> Score {
    assert_eq!(
        scores.len(),
        weights.len(),
        "every score needs exactly one weight"
    );
    assert!(
        weights.iter().all(|w| w.is_finite() && *w >= 0.0),
        "weights must be finite and non-negative"
    );

    let total: f64 = weights.iter().sum();
    if scores.is_empty() || total == 0.0 {
        return Score::ZERO;
    }

    let mean = scores
        .iter()
        .zip(weights)
        .map(|(score, weight)| score.value() * (weight / total))
        .sum();
    Score::new(mean)
}

/// Plain mean of `scores`.
pub fn merge_uniform(scores: &[Score]) -> Score {
    merge(scores, &vec![1.0; scores.len()])
}

/// Incremental collector of `(score, weight)` pairs.
///
/// ```rust
/// use papercheck::{Score, WeightedScores};
///
/// let mut set = WeightedScores::new();
/// set.push(Score::new(0.5), 100.0);
/// set.push(Score::new(1.0), 100.0);
/// assert_eq!(set.merge().value(), 0.75);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedScores {
    scores: Vec<Score>,
    weights: Vec<f64>,
}

impl WeightedScores {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty set with room for `capacity` pairs.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scores: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
        }
    }

    /// Add a pair.
    ///
    /// # Panics
    ///
    /// Panics if `weight` is negative or not finite.
    pub fn push(&mut self, score: Score, weight: f64) {
        assert!(
            weight.is_finite() && weight >= 0.0,
            "weights must be finite and non-negative"
        );
        self.scores.push(score);
        self.weights.push(weight);
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no pairs were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Weighted mean of the collected pairs.
    #[must_use]
    pub fn merge(&self) -> Score {
        merge(&self.scores, &self.weights)
    }
}
