//! Sentence segmentation and best-match scoring.
//!
//! ## Why Sentences?
//!
//! Whole-text LCS rewards scattered coincidences: two unrelated essays on
//! the same topic share plenty of letters in order. Copying is usually done
//! a sentence at a time, so the sentence view asks a sharper question: for
//! each sentence of the original, is there a sentence in the other text
//! that is nearly the same?
//!
//! ## Segmentation
//!
//! Terminals are `.`, `!`, `?` and their full-width forms `。`, `！`, `？`.
//! Pieces are trimmed; pieces shorter than the minimum length are dropped
//! (they are mostly headings, list markers and abbreviations):
//!
//! ```text
//! "Hello world. Hi! This is a test."
//!  -> ["Hello world", "This is a test"]     ("Hi" is under 10 characters)
//! ```
//!
//! ## Matching Pipeline
//!
//! Each original sentence is checked against every candidate, cheapest
//! test first:
//!
//! ```text
//! 1. exact text (hash lookup)     -> 1.0, done
//! 2. length ratio < 0.6           -> skip
//! 3. character overlap < 0.3      -> skip
//! 4. LCS / max(len)               -> keep best; stop once best > 0.8
//! ```
//!
//! A sentence whose best match does not exceed the acceptance floor adds
//! nothing, but still counts in the denominator.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::{Score, SimilarityConfig};

/// A trimmed sentence borrowed from a character sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// The sentence characters, without the terminal.
    pub text: &'a [char],
    /// Character offset of the first character in the source.
    pub start: usize,
    /// Zero-based index among the kept sentences.
    pub index: usize,
}

impl Sentence<'_> {
    /// Length in characters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the sentence is empty. Segmentation never yields one.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

const fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '。' | '！' | '？')
}

/// Split `text` into trimmed sentences of at least `min_length` characters.
///
/// ```rust
/// use papercheck::split_sentences;
///
/// let text: Vec<char> = "Hello world. Hi! 这是一个测试句子，共有十几个字。".chars().collect();
/// let sentences = split_sentences(&text, 10);
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0].text.iter().collect::<String>(), "Hello world");
/// ```
pub fn split_sentences(text: &[char], min_length: usize) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (i, &c) in text.iter().enumerate() {
        if is_terminal(c) {
            push_trimmed(&mut sentences, text, start, i, min_length);
            start = i + 1;
        }
    }
    push_trimmed(&mut sentences, text, start, text.len(), min_length);

    sentences
}

fn push_trimmed<'a>(
    sentences: &mut Vec<Sentence<'a>>,
    text: &'a [char],
    mut start: usize,
    mut end: usize,
    min_length: usize,
) {
    while start < end && text[start].is_whitespace() {
        start += 1;
    }
    while end > start && text[end - 1].is_whitespace() {
        end -= 1;
    }
    if end > start && end - start >= min_length {
        sentences.push(Sentence {
            text: &text[start..end],
            start,
            index: sentences.len(),
        });
    }
}

/// Cheap lexical overlap: shared characters (with multiplicity) over the
/// longer length.
///
/// An upper bound on `LCS / max(len)`, so a pair failing this check
/// cannot pass the LCS check at the same threshold.
///
/// ```rust
/// use papercheck::quick_similarity_check;
///
/// let a: Vec<char> = "listen".chars().collect();
/// let b: Vec<char> = "silent".chars().collect();
/// assert_eq!(quick_similarity_check(&a, &b).value(), 1.0);
/// ```
pub fn quick_similarity_check(a: &[char], b: &[char]) -> Score {
    if a.is_empty() || b.is_empty() {
        return Score::ZERO;
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for &c in a {
        *counts.entry(c).or_insert(0) += 1;
    }

    let mut shared = 0;
    for c in b {
        if let Some(n) = counts.get_mut(c) {
            if *n > 0 {
                *n -= 1;
                shared += 1;
            }
        }
    }

    Score::ratio(shared, a.len().max(b.len()))
}

/// Sentence-level similarity with staged candidate filtering.
///
/// The LCS itself is supplied by the caller, so the matcher can share a
/// memoized, size-aware [`SequenceMatcher`](crate::SequenceMatcher).
///
/// ```rust
/// use papercheck::{lcs_length, SentenceMatcher};
///
/// let matcher = SentenceMatcher::default();
/// let a: Vec<char> = "The first sentence is here. The second one too.".chars().collect();
/// let score = matcher.similarity(&a, &a, |x, y| {
///     lcs_length(&x.iter().collect::<String>(), &y.iter().collect::<String>())
/// });
/// assert_eq!(score.value(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SentenceMatcher {
    min_length: usize,
    acceptance_floor: f64,
    good_enough: f64,
    length_ratio_gate: f64,
    prefilter_floor: f64,
}

impl Default for SentenceMatcher {
    fn default() -> Self {
        Self::from_config(&SimilarityConfig::default())
    }
}

impl SentenceMatcher {
    /// Take the sentence settings from `config`.
    #[must_use]
    pub const fn from_config(config: &SimilarityConfig) -> Self {
        Self {
            min_length: config.min_sentence_length,
            acceptance_floor: config.sentence_acceptance_floor,
            good_enough: config.sentence_good_enough,
            length_ratio_gate: config.length_ratio_gate,
            prefilter_floor: config.prefilter_floor,
        }
    }

    /// Average best-match score over the original's sentences.
    ///
    /// Zero if either side has no qualifying sentence.
    pub fn similarity<F>(&self, original: &[char], copied: &[char], mut lcs: F) -> Score
    where
        F: FnMut(&[char], &[char]) -> usize,
    {
        let originals = split_sentences(original, self.min_length);
        let candidates = split_sentences(copied, self.min_length);
        if originals.is_empty() || candidates.is_empty() {
            return Score::ZERO;
        }

        let exact: HashSet<&[char]> = candidates.iter().map(|s| s.text).collect();

        let mut total = 0.0;
        for sentence in &originals {
            let best = self.best_match(sentence, &candidates, &exact, &mut lcs);
            trace!(index = sentence.index, best = best.value(), "sentence best match");
            if best.value() > self.acceptance_floor {
                total += best.value();
            }
        }

        Score::new(total / originals.len() as f64)
    }

    fn best_match<F>(
        &self,
        sentence: &Sentence<'_>,
        candidates: &[Sentence<'_>],
        exact: &HashSet<&[char]>,
        lcs: &mut F,
    ) -> Score
    where
        F: FnMut(&[char], &[char]) -> usize,
    {
        if exact.contains(sentence.text) {
            return Score::ONE;
        }

        let mut best = Score::ZERO;
        for candidate in candidates {
            let longer = sentence.len().max(candidate.len());
            let ratio = sentence.len().min(candidate.len()) as f64 / longer as f64;
            if ratio < self.length_ratio_gate {
                continue;
            }
            if quick_similarity_check(sentence.text, candidate.text).value() < self.prefilter_floor {
                continue;
            }

            let score = Score::ratio(lcs(sentence.text, candidate.text), longer);
            if score > best {
                best = score;
            }
            if best.value() > self.good_enough {
                break;
            }
        }
        best
    }
}
