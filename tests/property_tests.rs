//! Property-based tests for the similarity engine.
//!
//! These tests verify the invariants every comparison must keep:
//! - LCS: symmetric, bounded by the shorter input, exact on identity
//! - Chunking: windows cover the input with no gaps and end at its end
//! - Merging: result stays in [0, 1]
//! - Similarity: identity scores 1, empty input scores 0

use proptest::prelude::*;
use papercheck::{
    approximate_lcs, compute_similarity, lcs_length, merge, split_into_chunks, split_sentences,
    Chunk, Score, SequenceMatcher, SimilarityEngine,
};

// =============================================================================
// Test Generators
// =============================================================================

/// Short strings over a small alphabet, so that common subsequences exist.
fn small_alphabet_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcd]{0,40}").unwrap()
}

/// Mixed Latin / CJK text with sentence terminals.
fn prose_like_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex("[a-e 甲乙丙]{1,30}").unwrap(),
        1..8,
    )
    .prop_map(|parts| parts.join(". "))
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// =============================================================================
// Invariant Helpers
// =============================================================================

/// Every index of the input lies in at least one chunk.
fn chunks_cover_input(chunks: &[Chunk<'_>], len: usize) -> bool {
    let mut covered = vec![false; len];
    for chunk in chunks {
        for flag in &mut covered[chunk.start..chunk.end] {
            *flag = true;
        }
    }
    covered.iter().all(|&c| c)
}

/// Adjacent chunks overlap by exactly `overlap` characters.
fn overlaps_exact(chunks: &[Chunk<'_>], overlap: usize) -> bool {
    chunks.windows(2).all(|w| w[0].end - w[1].start == overlap)
}

// =============================================================================
// Sequence Matcher
// =============================================================================

proptest! {
    #[test]
    fn lcs_is_symmetric(a in small_alphabet_text(), b in small_alphabet_text()) {
        prop_assert_eq!(lcs_length(&a, &b), lcs_length(&b, &a));
    }

    #[test]
    fn lcs_of_self_is_length(a in small_alphabet_text()) {
        prop_assert_eq!(lcs_length(&a, &a), a.chars().count());
    }

    #[test]
    fn lcs_is_bounded(a in small_alphabet_text(), b in small_alphabet_text()) {
        let bound = a.chars().count().min(b.chars().count());
        prop_assert!(lcs_length(&a, &b) <= bound);
    }

    #[test]
    fn memoized_matches_uncached(a in small_alphabet_text(), b in small_alphabet_text()) {
        let matcher = SequenceMatcher::new(2_000, 4, 4);
        let (ca, cb) = (chars(&a), chars(&b));
        let expected = lcs_length(&a, &b);
        prop_assert_eq!(matcher.lcs_length(&ca, &cb), expected);
        prop_assert_eq!(matcher.lcs_length(&cb, &ca), expected);
    }

    #[test]
    fn approximate_is_bounded(a in small_alphabet_text(), b in small_alphabet_text(), k in 1usize..6) {
        let (ca, cb) = (chars(&a), chars(&b));
        prop_assert!(approximate_lcs(&ca, &cb, k) <= ca.len().min(cb.len()));
        prop_assert_eq!(approximate_lcs(&ca, &cb, k), approximate_lcs(&cb, &ca, k));
    }
}

// =============================================================================
// Chunker
// =============================================================================

proptest! {
    #[test]
    fn chunks_cover_and_end_at_end(
        len in 0usize..600,
        size in 1usize..120,
        overlap in 0usize..60
    ) {
        let overlap = overlap.min(size - 1);
        let text: Vec<char> = "xyz".chars().cycle().take(len).collect();
        let chunks = split_into_chunks(&text, size, overlap);

        prop_assert!(chunks_cover_input(&chunks, len));
        prop_assert!(overlaps_exact(&chunks, overlap));
        prop_assert_eq!(chunks.last().map_or(0, |c| c.end), len);
        for chunk in &chunks {
            prop_assert!(chunk.len() <= size);
            prop_assert_eq!(chunk.text, &text[chunk.start..chunk.end]);
        }
    }
}

// =============================================================================
// Sentences and Aggregation
// =============================================================================

proptest! {
    #[test]
    fn sentences_are_never_blank(text in prose_like_text(), min in 0usize..12) {
        let text = chars(&text);
        for sentence in split_sentences(&text, min) {
            prop_assert!(!sentence.is_empty());
            prop_assert!(sentence.len() >= min);
            prop_assert!(!sentence.text[0].is_whitespace());
            prop_assert!(!sentence.text[sentence.len() - 1].is_whitespace());
        }
    }

    #[test]
    fn merge_stays_in_range(
        pairs in prop::collection::vec((0.0f64..=1.0, 0.0f64..1e6), 0..50)
    ) {
        let scores: Vec<Score> = pairs.iter().map(|(s, _)| Score::new(*s)).collect();
        let weights: Vec<f64> = pairs.iter().map(|(_, w)| *w).collect();
        let merged = merge(&scores, &weights).value();
        prop_assert!((0.0..=1.0).contains(&merged));
    }

    #[test]
    fn merge_single_is_identity(s in 0.0f64..=1.0, w in 1e-6f64..1e6) {
        prop_assert_eq!(merge(&[Score::new(s)], &[w]), Score::new(s));
    }
}

// =============================================================================
// Similarity
// =============================================================================

proptest! {
    #[test]
    fn identity_scores_one(a in prose_like_text()) {
        prop_assert_eq!(compute_similarity(&a, &a), Score::ONE);
    }

    #[test]
    fn empty_scores_zero(a in prose_like_text()) {
        prop_assert_eq!(compute_similarity("", &a), Score::ZERO);
        prop_assert_eq!(compute_similarity(&a, ""), Score::ZERO);
    }

    #[test]
    fn similarity_in_range_and_deterministic(a in prose_like_text(), b in prose_like_text()) {
        let engine = SimilarityEngine::default();
        let first = engine.compute_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&first.value()));
        prop_assert_eq!(first, SimilarityEngine::default().compute_similarity(&a, &b));
    }
}
