//! k-gram estimate of LCS length for sequences too long to align exactly.
//!
//! ## The Idea
//!
//! Text copied from one document into another keeps most of its short
//! substrings. Count the distinct length-`k` substrings the two sides
//! share and each one stands in for `k` characters of common subsequence:
//!
//! ```text
//! k = 4
//! a = "abcdefg"   grams: abcd bcde cdef defg
//! b = "xxcdefyy"  grams: xxcd xcde cdef defy efyy
//!                                  ^^^^
//! shared = 1  ->  estimate = min(1 * 4, len(a)) = 4   (exact LCS: 4)
//! ```
//!
//! It is a proxy: repeated grams count once, order is ignored, and overlap
//! between shared grams is not deducted. Cost is linear in the input and
//! memory is bounded by the number of distinct grams, which is what makes
//! it usable where the quadratic matcher is not. Results are estimates and
//! are reported as such.

use std::collections::HashSet;

/// Estimate LCS length from shared `k`-grams.
///
/// The shorter input bounds the result. A side shorter than `k` has no
/// grams, so the estimate is zero.
///
/// ```rust
/// use papercheck::approximate_lcs;
///
/// let a: Vec<char> = "the cat sat".chars().collect();
/// let b: Vec<char> = "a cat sat down".chars().collect();
/// let estimate = approximate_lcs(&a, &b, 4);
/// assert!(estimate > 0 && estimate <= a.len());
/// ```
///
/// # Panics
///
/// Panics if `k == 0`.
pub fn approximate_lcs(a: &[char], b: &[char], k: usize) -> usize {
    assert!(k > 0, "k-gram size must be > 0");

    let (a, b) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if a.len() < k {
        return 0;
    }

    let grams: HashSet<&[char]> = a.windows(k).collect();
    let shared: HashSet<&[char]> = b.windows(k).filter(|g| grams.contains(g)).collect();

    (shared.len() * k).min(a.len())
}
