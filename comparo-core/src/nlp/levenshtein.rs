//! Levenshtein Distance (Edit Distance)
//!
//! Reference: Levenshtein, V. I. (1966). "Binary codes capable of correcting
//!            deletions, insertions, and reversals"
//!
//! # Time Complexity
//! O(m × n) where m, n are string lengths
//!
//! # Space Complexity
//! O(min(m, n)) with space optimization
//!
//! # Operations
//! - Insert: cost = 1
//! - Delete: cost = 1
//! - Substitute: cost = 1

/// Compute Levenshtein edit distance between two strings.
///
/// # Algorithm
/// Uses dynamic programming with Wagner-Fischer algorithm.
/// Space-optimized to use only O(min(m,n)) memory.
///
/// # Returns
/// Number of single-character edits (insertions, deletions, substitutions)
/// needed to transform `a` into `b`.
///
/// # Example
/// ```
/// use comparo_core::nlp::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Rows are sized by the shorter string
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };
    let m = short.len();

    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr: Vec<usize> = vec![0; m + 1];

    for (j, &cl) in long.iter().enumerate() {
        curr[0] = j + 1;

        for i in 1..=m {
            let cost = if short[i - 1] == cl { 0 } else { 1 };

            curr[i] = (prev[i] + 1)           // deletion
                .min(curr[i - 1] + 1)          // insertion
                .min(prev[i - 1] + cost);      // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Levenshtein similarity as a percentage (0.0 to 100.0).
///
/// # Formula
/// `similarity = (1 - distance / max_length) * 100`, clamped to `[0, 100]`
///
/// Two empty strings are identical and score `100.0`.
///
/// # Example
/// ```
/// use comparo_core::nlp::levenshtein::levenshtein_similarity;
///
/// assert_eq!(levenshtein_similarity("hello", "hello"), 100.0);
/// assert_eq!(levenshtein_similarity("", ""), 100.0);
/// assert!(levenshtein_similarity("cat", "hat") > 60.0);
/// ```
#[inline]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }

    similarity_from_distance(levenshtein_distance(a, b), max_len)
}

/// Convert a distance over strings of at most `max_len` characters into a
/// percentage.
#[inline]
pub(crate) fn similarity_from_distance(distance: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        return 100.0;
    }
    ((1.0 - distance as f64 / max_len as f64) * 100.0).clamp(0.0, 100.0)
}

/// Truncate `text` to at most `max_length` characters.
///
/// # Example
/// ```
/// use comparo_core::nlp::levenshtein::truncate_chars;
///
/// assert_eq!(truncate_chars("kitten", 3), "kit");
/// assert_eq!(truncate_chars("cat", 10), "cat");
/// ```
#[inline]
pub fn truncate_chars(text: &str, max_length: usize) -> &str {
    match text.char_indices().nth(max_length) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
