//! Longest common subsequence in bounded memory.
//!
//! ## The Recurrence
//!
//! ```text
//! dp[i][j] = dp[i-1][j-1] + 1              if a[i] == b[j]
//!          = max(dp[i-1][j], dp[i][j-1])   otherwise
//! ```
//!
//! Only the previous row is ever read, so a single row of
//! `min(|a|, |b|) + 1` counters is enough. Updating that row in place
//! destroys `dp[i-1][j-1]` one step before it is needed, so the diagonal
//! value is carried in a separate variable:
//!
//! ```text
//! row:  [0, d, u, ...]      before writing row[j]:
//!           ^  ^            diag = old row[j-1]  (saved last step)
//!                           up   = old row[j]    (saved now, becomes next diag)
//! ```
//!
//! ## Shortcuts
//!
//! Empty input, identical input and literal containment all have a known
//! answer and skip the quadratic pass. They change the cost, never the
//! result.
//!
//! ## Size Limits
//!
//! Time is `O(|a| * |b|)`. [`SequenceMatcher::estimate`] refuses to run the
//! exact pass above the configured ceiling and falls back to an estimate;
//! [`SequenceMatcher::lcs_length`] has no such guard and is meant for
//! inputs already known to be small.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use tracing::trace;

use crate::approx::approximate_lcs;
use crate::chunk::FixedChunker;
use crate::config::LongPairMethod;

/// Exact LCS length, no caching.
///
/// ```rust
/// use papercheck::lcs_length;
///
/// assert_eq!(lcs_length("ABCBDAB", "BDCABA"), 4);
/// assert_eq!(lcs_length("", "abc"), 0);
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    shortcut(&a, &b).unwrap_or_else(|| rolling_row(&a, &b))
}

/// Answers that need no dynamic programming.
fn shortcut(a: &[char], b: &[char]) -> Option<usize> {
    if a.is_empty() || b.is_empty() {
        return Some(0);
    }
    if a == b {
        return Some(a.len());
    }
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if long.windows(short.len()).any(|w| w == short) {
        return Some(short.len());
    }
    None
}

/// The single-row DP. The row is indexed by the shorter input.
fn rolling_row(a: &[char], b: &[char]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut row = vec![0usize; short.len() + 1];

    for &lc in long {
        let mut diag = 0;
        for (j, &sc) in short.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if lc == sc { diag + 1 } else { up.max(row[j]) };
            diag = up;
        }
    }

    row[short.len()]
}

/// How an LCS length was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcsMethod {
    /// Full dynamic programming (or an exact shortcut).
    Exact,
    /// Shared k-gram count.
    Approximate,
    /// Sum of exact LCS over aligned windows, capped.
    Chunked,
}

/// An LCS length tagged with the method that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcsEstimate {
    /// Common subsequence length (exact or estimated).
    pub length: usize,
    /// Where the number came from.
    pub method: LcsMethod,
}

type PairKey = (Box<[char]>, Box<[char]>);

/// Exact LCS with a bounded memo and size-aware fallbacks.
///
/// The cache belongs to the matcher, not to the process: two matchers
/// never share results, and dropping the matcher drops its cache. It sits
/// behind a mutex so a matcher can be shared across threads.
///
/// ```rust
/// use papercheck::{LcsMethod, SequenceMatcher};
///
/// let matcher = SequenceMatcher::new(2_000, 4, 16);
/// let a: Vec<char> = "similar text".chars().collect();
/// let b: Vec<char> = "similar texts".chars().collect();
///
/// let estimate = matcher.estimate(&a, &b);
/// assert_eq!(estimate.length, 12);
/// assert_eq!(estimate.method, LcsMethod::Exact);
/// ```
#[derive(Debug)]
pub struct SequenceMatcher {
    ceiling: usize,
    kgram_size: usize,
    long_pair_method: LongPairMethod,
    cache: Option<Mutex<LruCache<PairKey, usize>>>,
}

impl SequenceMatcher {
    /// Create a matcher.
    ///
    /// # Arguments
    ///
    /// * `ceiling` - Longest input the exact pass may see
    /// * `kgram_size` - k for the approximate fallback
    /// * `cache_capacity` - Memo entries; zero disables the memo
    ///
    /// # Panics
    ///
    /// Panics if `ceiling == 0` or `kgram_size == 0`.
    #[must_use]
    pub fn new(ceiling: usize, kgram_size: usize, cache_capacity: usize) -> Self {
        assert!(ceiling > 0, "exact-match ceiling must be > 0");
        assert!(kgram_size > 0, "k-gram size must be > 0");
        Self {
            ceiling,
            kgram_size,
            long_pair_method: LongPairMethod::default(),
            cache: NonZeroUsize::new(cache_capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    /// Use `method` for pairs above the ceiling.
    #[must_use]
    pub fn with_long_pair_method(mut self, method: LongPairMethod) -> Self {
        self.long_pair_method = method;
        self
    }

    /// The exact-match ceiling.
    #[must_use]
    pub const fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Exact LCS length, memoized.
    ///
    /// Not bounded by the ceiling; callers holding unbounded input should
    /// use [`estimate`](Self::estimate).
    pub fn lcs_length(&self, a: &[char], b: &[char]) -> usize {
        if let Some(length) = shortcut(a, b) {
            return length;
        }
        let Some(cache) = &self.cache else {
            return rolling_row(a, b);
        };

        let key = pair_key(a, b);
        if let Ok(mut cache) = cache.lock() {
            if let Some(&length) = cache.get(&key) {
                trace!(len_a = a.len(), len_b = b.len(), "lcs cache hit");
                return length;
            }
        }

        let length = rolling_row(a, b);
        if let Ok(mut cache) = cache.lock() {
            cache.put(key, length);
        }
        length
    }

    /// LCS length, exact when both inputs fit under the ceiling.
    ///
    /// Larger pairs go to the configured [`LongPairMethod`].
    pub fn estimate(&self, a: &[char], b: &[char]) -> LcsEstimate {
        if a.len().max(b.len()) <= self.ceiling {
            return LcsEstimate {
                length: self.lcs_length(a, b),
                method: LcsMethod::Exact,
            };
        }
        // cheap shortcuts still apply to long input
        if a.is_empty() || b.is_empty() || a == b {
            return LcsEstimate {
                length: if a == b { a.len() } else { 0 },
                method: LcsMethod::Exact,
            };
        }

        match self.long_pair_method {
            LongPairMethod::Approximate => LcsEstimate {
                length: approximate_lcs(a, b, self.kgram_size),
                method: LcsMethod::Approximate,
            },
            LongPairMethod::ChunkedExact => LcsEstimate {
                length: self.chunked_lcs(a, b),
                method: LcsMethod::Chunked,
            },
        }
    }

    /// Sum of exact LCS over index-aligned, ceiling-sized windows.
    ///
    /// Window `i` of `a` is matched only against window `i` of `b`, and
    /// windows past the end of the shorter split are ignored. Anything
    /// copied across a window boundary or shifted by more than a window is
    /// missed, so this underestimates. The sum is capped at the shorter
    /// length.
    pub fn chunked_lcs(&self, a: &[char], b: &[char]) -> usize {
        let chunker = FixedChunker::no_overlap(self.ceiling);
        let total: usize = chunker
            .chunk(a)
            .iter()
            .zip(chunker.chunk(b).iter())
            .map(|(x, y)| self.lcs_length(x.text, y.text))
            .sum();
        total.min(a.len().min(b.len()))
    }

    /// Number of memoized pairs.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache
            .as_ref()
            .and_then(|c| c.lock().ok().map(|c| c.len()))
            .unwrap_or(0)
    }

    /// Forget all memoized pairs.
    pub fn clear_cache(&self) {
        if let Some(Ok(mut cache)) = self.cache.as_ref().map(Mutex::lock) {
            cache.clear();
        }
    }
}

/// LCS is symmetric, so the pair is stored in a canonical order.
fn pair_key(a: &[char], b: &[char]) -> PairKey {
    let (x, y) = if (a.len(), a) <= (b.len(), b) {
        (a, b)
    } else {
        (b, a)
    };
    (x.into(), y.into())
}
