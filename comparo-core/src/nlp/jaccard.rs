//! Word N-gram Jaccard Similarity
//!
//! Reference: Jaccard, P. (1912). "The distribution of the flora in the
//!            alpine zone"
//!
//! `J(A, B) = |A ∩ B| / |A ∪ B|`
//!
//! Terms are word n-grams: `n` consecutive words joined by a single space.
//! Tokenization here is self-contained (any non-letter is a boundary), so the
//! functions work on raw as well as normalized text.

use std::collections::HashSet;

/// Smallest accepted n-gram size.
pub const MIN_NGRAM_SIZE: usize = 1;

/// Largest accepted n-gram size.
pub const MAX_NGRAM_SIZE: usize = 10;

/// Maximum number of shared n-grams kept in [`JaccardStats::sample_common`].
pub const SAMPLE_LIMIT: usize = 5;

/// Set statistics behind a Jaccard score.
#[derive(Debug, Clone, PartialEq)]
pub struct JaccardStats {
    /// `|A ∩ B| / |A ∪ B| * 100`
    pub similarity: f64,
    /// n-gram size actually used (after clamping)
    pub ngram_size: usize,
    pub ngrams1_count: usize,
    pub ngrams2_count: usize,
    pub intersection_size: usize,
    pub union_size: usize,
    /// Up to [`SAMPLE_LIMIT`] shared n-grams, in unspecified order
    pub sample_common: Vec<String>,
}

/// Clamp an n-gram size into `[1, 10]`. Out-of-range sizes are never an error.
#[inline]
pub fn clamp_ngram_size(n: usize) -> usize {
    n.clamp(MIN_NGRAM_SIZE, MAX_NGRAM_SIZE)
}

/// Split text into lowercase words on any non-ASCII-letter boundary.
///
/// # Example
/// ```
/// use comparo_core::nlp::jaccard::tokenize;
///
/// assert_eq!(tokenize("It's a dog-eat-dog world!"), ["it", "s", "a", "dog", "eat", "dog", "world"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            word.push(c.to_ascii_lowercase());
        } else if !word.is_empty() {
            words.push(std::mem::take(&mut word));
        }
    }
    if !word.is_empty() {
        words.push(word);
    }

    words
}

/// Build the set of word n-grams of `text`.
///
/// A text with fewer than `n` words contributes a single n-gram made of all
/// its words; a text with no words contributes nothing. `n` is clamped with
/// [`clamp_ngram_size`].
///
/// # Example
/// ```
/// use comparo_core::nlp::jaccard::word_ngrams;
///
/// let bigrams = word_ngrams("a b c", 2);
/// assert!(bigrams.contains("a b"));
/// assert!(bigrams.contains("b c"));
/// assert_eq!(bigrams.len(), 2);
/// ```
pub fn word_ngrams(text: &str, n: usize) -> HashSet<String> {
    let n = clamp_ngram_size(n);
    let words = tokenize(text);

    if words.is_empty() {
        return HashSet::new();
    }
    if words.len() < n {
        return HashSet::from([words.join(" ")]);
    }

    words.windows(n).map(|window| window.join(" ")).collect()
}

/// Compute word n-gram Jaccard similarity between two texts.
///
/// # Conventions
/// - both n-gram sets empty: `100.0`
/// - exactly one empty: `0.0`
///
/// # Example
/// ```
/// use comparo_core::nlp::jaccard::jaccard_similarity;
///
/// let stats = jaccard_similarity("a b c", "b c d", 1);
/// assert_eq!(stats.intersection_size, 2);
/// assert_eq!(stats.union_size, 4);
/// assert!((stats.similarity - 50.0).abs() < 1e-9);
/// ```
pub fn jaccard_similarity(a: &str, b: &str, n: usize) -> JaccardStats {
    let ngram_size = clamp_ngram_size(n);
    let set1 = word_ngrams(a, ngram_size);
    let set2 = word_ngrams(b, ngram_size);

    let mut intersection_size = 0;
    let mut sample_common = Vec::with_capacity(SAMPLE_LIMIT);
    for ngram in set1.intersection(&set2) {
        intersection_size += 1;
        if sample_common.len() < SAMPLE_LIMIT {
            sample_common.push(ngram.clone());
        }
    }

    let union_size = set1.len() + set2.len() - intersection_size;

    let similarity = match (set1.is_empty(), set2.is_empty()) {
        (true, true) => 100.0,
        (true, false) | (false, true) => 0.0,
        _ => intersection_size as f64 / union_size as f64 * 100.0,
    };

    JaccardStats {
        similarity,
        ngram_size,
        ngrams1_count: set1.len(),
        ngrams2_count: set2.len(),
        intersection_size,
        union_size,
        sample_common,
    }
}
