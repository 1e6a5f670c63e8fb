//! Comparison orchestration.
//!
//! A [`Comparator`] normalizes both inputs once, runs one of the matchers in
//! [`crate::nlp`] (on chunks, when configured) and folds the outcome into a
//! [`ComparisonResult`].
//!
//! Substring and subsequence similarity are measured against the *original*
//! character counts of the inputs, never against cleaned or chunked lengths.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::config::{ComparisonConfig, MatchMode};
use crate::error::{ComparisonError, Result};
use crate::nlp::chunker::{self, Chunk};
use crate::nlp::jaccard::jaccard_similarity;
use crate::nlp::levenshtein::{levenshtein_distance, similarity_from_distance, truncate_chars};
use crate::nlp::normalize::{normalize, NormalizedText};
use crate::nlp::subsequence::longest_common_subsequence;
use crate::nlp::substring::longest_common_substring;

// ============================================================================
// Algorithm tags
// ============================================================================

/// Which matcher to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Substring,
    Subsequence,
    Levenshtein,
    Jaccard,
}

impl FromStr for AlgorithmKind {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lcstr" | "substring" => Ok(AlgorithmKind::Substring),
            "lcs" | "subsequence" => Ok(AlgorithmKind::Subsequence),
            "levenshtein" | "edit-distance" => Ok(AlgorithmKind::Levenshtein),
            "jaccard" | "ngram" => Ok(AlgorithmKind::Jaccard),
            other => Err(ComparisonError::invalid_argument(
                "algorithm",
                format!("unknown algorithm `{other}`"),
            )),
        }
    }
}

/// Algorithm tag reported in a [`ComparisonResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    #[serde(rename = "Longest Common Substring")]
    LongestCommonSubstring,
    #[serde(rename = "Longest Common Substring (Chunks)")]
    LongestCommonSubstringChunks,
    #[serde(rename = "Longest Common Subsequence")]
    LongestCommonSubsequence,
    #[serde(rename = "Longest Common Subsequence (Chunks)")]
    LongestCommonSubsequenceChunks,
    #[serde(rename = "Levenshtein Distance")]
    Levenshtein,
    #[serde(rename = "Jaccard Similarity (N-Grams)")]
    Jaccard,
}

impl Algorithm {
    /// Human-readable name, identical to the serialized tag.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::LongestCommonSubstring => "Longest Common Substring",
            Algorithm::LongestCommonSubstringChunks => "Longest Common Substring (Chunks)",
            Algorithm::LongestCommonSubsequence => "Longest Common Subsequence",
            Algorithm::LongestCommonSubsequenceChunks => "Longest Common Subsequence (Chunks)",
            Algorithm::Levenshtein => "Levenshtein Distance",
            Algorithm::Jaccard => "Jaccard Similarity (N-Grams)",
        }
    }

    pub const fn kind(self) -> AlgorithmKind {
        match self {
            Algorithm::LongestCommonSubstring | Algorithm::LongestCommonSubstringChunks => {
                AlgorithmKind::Substring
            }
            Algorithm::LongestCommonSubsequence | Algorithm::LongestCommonSubsequenceChunks => {
                AlgorithmKind::Subsequence
            }
            Algorithm::Levenshtein => AlgorithmKind::Levenshtein,
            Algorithm::Jaccard => AlgorithmKind::Jaccard,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Result records
// ============================================================================

/// Outcome of one comparison.
///
/// Serializes to a flat camelCase record (`algorithm`, `similarity`,
/// `text1Length`, `text2Length` plus the fields of the [`Outcome`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub algorithm: Algorithm,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Percentage in `[0, 100]`
    pub similarity: f64,
    /// Character count of the first input before normalization
    pub text1_length: usize,
    /// Character count of the second input before normalization
    pub text2_length: usize,
}

impl ComparisonResult {
    /// The matched text for substring and subsequence comparisons.
    pub fn matched_text(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Substring(m) => Some(&m.substring),
            Outcome::Subsequence(m) => Some(&m.subsequence),
            _ => None,
        }
    }

    /// Number of chunk comparisons executed, for chunked modes.
    pub fn chunks_processed(&self) -> Option<usize> {
        match &self.outcome {
            Outcome::Substring(m) => m.chunks_processed,
            Outcome::Subsequence(m) => m.chunks_processed,
            _ => None,
        }
    }
}

/// Algorithm-specific part of a [`ComparisonResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Substring(SubstringMatch),
    Subsequence(SubsequenceMatch),
    EditDistance(EditDistanceStats),
    NGram(NGramStats),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstringMatch {
    pub substring: String,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks_processed: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsequenceMatch {
    pub subsequence: String,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks_processed: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDistanceStats {
    pub distance: usize,
    /// Normalized, truncated length of the first text
    pub processed_length1: usize,
    /// Normalized, truncated length of the second text
    pub processed_length2: usize,
    pub max_length_used: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NGramStats {
    #[serde(rename = "nGramaSize")]
    pub ngram_size: usize,
    #[serde(rename = "nGramas1Count")]
    pub ngrams1_count: usize,
    #[serde(rename = "nGramas2Count")]
    pub ngrams2_count: usize,
    #[serde(rename = "commonNGramas")]
    pub common_ngrams: usize,
    #[serde(rename = "unionSize")]
    pub union_size: usize,
    /// Bounded sample of shared n-grams, in unspecified order
    #[serde(rename = "sampleCommonNGramas")]
    pub sample_common_ngrams: Vec<String>,
}

/// Normalization exposed on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreprocessResult {
    pub processed: String,
    pub original_length: usize,
    pub processed_length: usize,
}

// ============================================================================
// Comparator
// ============================================================================

/// Runs comparisons with a validated [`ComparisonConfig`].
///
/// Holds no state besides its configuration; a single instance can serve
/// any number of callers.
///
/// # Example
/// ```
/// use comparo_core::{Comparator, ComparisonConfig};
///
/// let comparator = Comparator::new(ComparisonConfig::default()).unwrap();
/// let result = comparator.compare_substring("abcdef!", "zcdefg").unwrap();
/// assert_eq!(result.matched_text(), Some("cdef"));
/// assert_eq!(result.text1_length, 7);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    config: ComparisonConfig,
}

impl Comparator {
    /// Create a comparator.
    ///
    /// # Errors
    /// `InvalidArgument` if the config has a zero `chunk_size`.
    pub fn new(config: ComparisonConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Run the comparison selected by `kind`.
    pub fn compare(&self, kind: AlgorithmKind, text1: &str, text2: &str) -> Result<ComparisonResult> {
        match kind {
            AlgorithmKind::Substring => self.compare_substring(text1, text2),
            AlgorithmKind::Subsequence => self.compare_subsequence(text1, text2),
            AlgorithmKind::Levenshtein => Ok(self.compare_levenshtein(text1, text2)),
            AlgorithmKind::Jaccard => Ok(self.compare_jaccard(text1, text2)),
        }
    }

    /// Normalize a single text.
    pub fn preprocess(&self, text: &str) -> PreprocessResult {
        let clean = normalize(text);
        PreprocessResult {
            processed_length: clean.len(),
            original_length: clean.original_char_count(),
            processed: clean.into_string(),
        }
    }

    /// Longest common substring of the normalized texts.
    ///
    /// In chunked mode every chunk of `text1` is compared with every chunk of
    /// `text2`; the first longest substring found is kept.
    pub fn compare_substring(&self, text1: &str, text2: &str) -> Result<ComparisonResult> {
        let clean1 = normalize(text1);
        let clean2 = normalize(text2);

        let (algorithm, substring, chunks_processed) = match self.config.mode {
            MatchMode::Exact => (
                Algorithm::LongestCommonSubstring,
                longest_common_substring(clean1.as_str(), clean2.as_str()),
                None,
            ),
            MatchMode::Chunked => {
                let chunks1 = chunker::split(clean1.as_str(), self.config.chunk_size)?;
                let chunks2 = chunker::split(clean2.as_str(), self.config.chunk_size)?;
                let (best, processed) = best_substring_across_chunks(&chunks1, &chunks2);
                (Algorithm::LongestCommonSubstringChunks, best, Some(processed))
            }
        };

        let length = substring.chars().count();
        let similarity = percent_of_original(length, &clean1, &clean2);

        debug!(
            algorithm = %algorithm,
            length,
            chunks_processed = ?chunks_processed,
            similarity,
            "Substring comparison complete"
        );

        Ok(ComparisonResult {
            algorithm,
            outcome: Outcome::Substring(SubstringMatch {
                substring,
                length,
                chunks_processed,
            }),
            similarity,
            text1_length: clean1.original_char_count(),
            text2_length: clean2.original_char_count(),
        })
    }

    /// Longest common subsequence of the normalized texts.
    ///
    /// In chunked mode chunk `i` of `text1` is compared only with chunk `i`
    /// of `text2`. Subsequences spanning chunk boundaries are not found.
    pub fn compare_subsequence(&self, text1: &str, text2: &str) -> Result<ComparisonResult> {
        let clean1 = normalize(text1);
        let clean2 = normalize(text2);

        let (algorithm, subsequence, chunks_processed) = match self.config.mode {
            MatchMode::Exact => (
                Algorithm::LongestCommonSubsequence,
                longest_common_subsequence(clean1.as_str(), clean2.as_str()),
                None,
            ),
            MatchMode::Chunked => {
                let chunks1 = chunker::split(clean1.as_str(), self.config.chunk_size)?;
                let chunks2 = chunker::split(clean2.as_str(), self.config.chunk_size)?;
                let (best, processed) = best_subsequence_by_position(&chunks1, &chunks2);
                (Algorithm::LongestCommonSubsequenceChunks, best, Some(processed))
            }
        };

        let length = subsequence.chars().count();
        let similarity = percent_of_original(length, &clean1, &clean2);

        debug!(
            algorithm = %algorithm,
            length,
            chunks_processed = ?chunks_processed,
            similarity,
            "Subsequence comparison complete"
        );

        Ok(ComparisonResult {
            algorithm,
            outcome: Outcome::Subsequence(SubsequenceMatch {
                subsequence,
                length,
                chunks_processed,
            }),
            similarity,
            text1_length: clean1.original_char_count(),
            text2_length: clean2.original_char_count(),
        })
    }

    /// Levenshtein distance between the normalized texts.
    ///
    /// With `max_length` set, each cleaned text is cut to that many
    /// characters first and `maxLengthUsed` echoes the cap. Without it the
    /// whole texts are compared and `maxLengthUsed` is the longer cleaned
    /// length. A cap of 0 empties both sides, so any two texts score
    /// distance 0 and 100% similarity.
    pub fn compare_levenshtein(&self, text1: &str, text2: &str) -> ComparisonResult {
        let clean1 = normalize(text1);
        let clean2 = normalize(text2);

        let (processed1, processed2) = match self.config.max_length {
            Some(max_length) => {
                let processed1 = truncate_chars(clean1.as_str(), max_length);
                let processed2 = truncate_chars(clean2.as_str(), max_length);
                if processed1.len() < clean1.len() || processed2.len() < clean2.len() {
                    info!(
                        max_length,
                        cleaned_length1 = clean1.len(),
                        cleaned_length2 = clean2.len(),
                        "Truncating input for edit distance"
                    );
                }
                (processed1, processed2)
            }
            None => (clean1.as_str(), clean2.as_str()),
        };
        let max_length_used = self
            .config
            .max_length
            .unwrap_or_else(|| processed1.len().max(processed2.len()));

        let distance = levenshtein_distance(processed1, processed2);
        let similarity =
            similarity_from_distance(distance, processed1.len().max(processed2.len()));

        debug!(
            distance,
            processed_length1 = processed1.len(),
            processed_length2 = processed2.len(),
            similarity,
            "Levenshtein comparison complete"
        );

        ComparisonResult {
            algorithm: Algorithm::Levenshtein,
            outcome: Outcome::EditDistance(EditDistanceStats {
                distance,
                processed_length1: processed1.len(),
                processed_length2: processed2.len(),
                max_length_used,
            }),
            similarity,
            text1_length: clean1.original_char_count(),
            text2_length: clean2.original_char_count(),
        }
    }

    /// Word n-gram Jaccard similarity of the normalized texts.
    pub fn compare_jaccard(&self, text1: &str, text2: &str) -> ComparisonResult {
        let clean1 = normalize(text1);
        let clean2 = normalize(text2);

        let stats = jaccard_similarity(clean1.as_str(), clean2.as_str(), self.config.ngram_size);

        debug!(
            ngram_size = stats.ngram_size,
            common = stats.intersection_size,
            union_size = stats.union_size,
            similarity = stats.similarity,
            "Jaccard comparison complete"
        );

        ComparisonResult {
            algorithm: Algorithm::Jaccard,
            similarity: stats.similarity,
            outcome: Outcome::NGram(NGramStats {
                ngram_size: stats.ngram_size,
                ngrams1_count: stats.ngrams1_count,
                ngrams2_count: stats.ngrams2_count,
                common_ngrams: stats.intersection_size,
                union_size: stats.union_size,
                sample_common_ngrams: stats.sample_common,
            }),
            text1_length: clean1.original_char_count(),
            text2_length: clean2.original_char_count(),
        }
    }
}

// ============================================================================
// Chunk aggregation
// ============================================================================

/// Cross product of chunk pairs. Returns the best substring and the number
/// of pairs compared.
fn best_substring_across_chunks(chunks1: &[Chunk<'_>], chunks2: &[Chunk<'_>]) -> (String, usize) {
    let mut best = String::new();
    let mut processed = 0;

    for c1 in chunks1 {
        for c2 in chunks2 {
            let found = longest_common_substring(c1.as_str(), c2.as_str());
            processed += 1;

            // strict: the first longest wins
            if found.len() > best.len() {
                trace!(
                    chunk1 = c1.index,
                    chunk2 = c2.index,
                    length = found.len(),
                    "New longest substring"
                );
                best = found;
            }
        }
    }

    (best, processed)
}

/// Positional pairing: chunk `i` against chunk `i` only.
fn best_subsequence_by_position(chunks1: &[Chunk<'_>], chunks2: &[Chunk<'_>]) -> (String, usize) {
    let mut best = String::new();
    let mut processed = 0;

    for (c1, c2) in chunks1.iter().zip(chunks2) {
        let found = longest_common_subsequence(c1.as_str(), c2.as_str());
        processed += 1;

        if found.len() > best.len() {
            trace!(chunk = c1.index, length = found.len(), "New longest subsequence");
            best = found;
        }
    }

    (best, processed)
}

/// `length / max(original counts) * 100`, or 0 when both inputs were empty.
fn percent_of_original(length: usize, clean1: &NormalizedText, clean2: &NormalizedText) -> f64 {
    let max_len = clean1.original_char_count().max(clean2.original_char_count());
    if max_len == 0 {
        return 0.0;
    }
    (length as f64 / max_len as f64 * 100.0).clamp(0.0, 100.0)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn comparator(mode: MatchMode, chunk_size: usize) -> Comparator {
        Comparator::new(ComparisonConfig {
            mode,
            chunk_size,
            ..Default::default()
        })
        .unwrap()
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("comparo_core=trace"))
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_new_rejects_zero_chunk_size() {
        let err = Comparator::new(ComparisonConfig {
            chunk_size: 0,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.parameter(), "chunk_size");
    }

    #[test]
    fn test_substring_exact() {
        let cmp = comparator(MatchMode::Exact, 1);
        let result = cmp.compare_substring("The Cat and THE Dog", "a cat, a dog").unwrap();

        assert_eq!(result.algorithm, Algorithm::LongestCommonSubstring);
        assert_eq!(result.matched_text(), Some("cat dog"));
        assert_eq!(result.chunks_processed(), None);
        assert_eq!(result.text1_length, 19);
        assert_eq!(result.text2_length, 12);
        assert!((result.similarity - 7.0 / 19.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_substring_chunked_cross_product() {
        init_tracing();
        // cleaned: "abcdef" and "xxcdef" -> chunks [abc, def] and [xxc, def]
        let cmp = comparator(MatchMode::Chunked, 3);
        let result = cmp.compare_substring("abcdef", "xxcdef").unwrap();

        assert_eq!(result.algorithm, Algorithm::LongestCommonSubstringChunks);
        assert_eq!(result.chunks_processed(), Some(4));
        // "cdef" spans the chunk boundary; chunking finds "def"
        assert_eq!(result.matched_text(), Some("def"));
        assert!((result.similarity - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_substring_chunked_finds_misaligned_match() {
        // cleaned: "aaaxyz" / "xyzbbbccc": "xyz" is chunk 1 vs chunk 0
        let cmp = comparator(MatchMode::Chunked, 3);
        let result = cmp.compare_substring("aaaxyz", "xyzbbbccc").unwrap();
        assert_eq!(result.matched_text(), Some("xyz"));
        assert_eq!(result.chunks_processed(), Some(6));
    }

    #[test]
    fn test_substring_chunked_first_seen_wins() {
        // chunk pairs (ab, ab) and (cd, cd) both give length 2
        let cmp = comparator(MatchMode::Chunked, 2);
        let result = cmp.compare_substring("abcd", "abcd").unwrap();
        assert_eq!(result.matched_text(), Some("ab"));
    }

    #[test]
    fn test_subsequence_chunked_positional() {
        init_tracing();
        // cleaned: "aaaxyz" / "xyzbbbccc" -> pairs (aaa, xyz) and (xyz, bbb)
        let cmp = comparator(MatchMode::Chunked, 3);
        let result = cmp.compare_subsequence("aaaxyz", "xyzbbbccc").unwrap();

        assert_eq!(result.algorithm, Algorithm::LongestCommonSubsequenceChunks);
        assert_eq!(result.chunks_processed(), Some(2));
        assert_eq!(result.matched_text(), Some(""));
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.text2_length, 9);
    }

    #[test]
    fn test_subsequence_exact() {
        let cmp = comparator(MatchMode::Exact, 10);
        let result = cmp
            .compare_subsequence(
                "The quick brown fox jumps over the lazy dog",
                "A quick brown dog jumps over a lazy fox",
            )
            .unwrap();
        assert_eq!(result.matched_text(), Some("quick brown o jumps over lazy o"));
        assert_eq!(result.text1_length, 43);
        assert_eq!(result.text2_length, 39);
        assert!((result.similarity - 31.0 / 43.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_inputs_are_not_errors() {
        let cmp = Comparator::default();

        let result = cmp.compare_substring("", "").unwrap();
        assert_eq!(result.matched_text(), Some(""));
        assert_eq!(result.chunks_processed(), Some(0));
        assert_eq!(result.similarity, 0.0);

        let result = cmp.compare_subsequence("", "abc").unwrap();
        assert_eq!(result.chunks_processed(), Some(0));
        assert_eq!(result.similarity, 0.0);

        let result = cmp.compare_levenshtein("", "");
        assert_eq!(result.similarity, 100.0);

        let result = cmp.compare_jaccard("", "");
        assert_eq!(result.similarity, 100.0);
    }

    #[test]
    fn test_levenshtein_truncates_and_reports() {
        let cmp = Comparator::new(ComparisonConfig {
            max_length: Some(4),
            ..Default::default()
        })
        .unwrap();
        let result = cmp.compare_levenshtein("Kitten!", "sitting");

        match &result.outcome {
            Outcome::EditDistance(stats) => {
                // "kitt" vs "sitt"
                assert_eq!(stats.distance, 1);
                assert_eq!(stats.processed_length1, 4);
                assert_eq!(stats.processed_length2, 4);
                assert_eq!(stats.max_length_used, 4);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(result.text1_length, 7);
        assert!((result.similarity - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_levenshtein_full_length() {
        let result = Comparator::default().compare_levenshtein("kitten", "sitting");
        match result.outcome {
            Outcome::EditDistance(stats) => {
                assert_eq!(stats.distance, 3);
                assert_eq!(stats.max_length_used, 7);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_levenshtein_default_compares_long_texts_in_full() {
        let text1 = "ab ".repeat(3500);
        let text2 = format!("{text1}zz zz");
        let result = Comparator::default().compare_levenshtein(&text1, &text2);

        match &result.outcome {
            Outcome::EditDistance(stats) => {
                assert_eq!(stats.processed_length1, 10_499);
                assert_eq!(stats.processed_length2, 10_505);
                assert_eq!(stats.distance, 6);
                assert_eq!(stats.max_length_used, 10_505);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(result.similarity < 100.0);
        assert!((result.similarity - (1.0 - 6.0 / 10_505.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_levenshtein_zero_cap_scores_everything_identical() {
        let cmp = Comparator::new(ComparisonConfig {
            max_length: Some(0),
            ..Default::default()
        })
        .unwrap();
        let result = cmp.compare_levenshtein("apple", "zebra");

        match &result.outcome {
            Outcome::EditDistance(stats) => {
                assert_eq!(stats.distance, 0);
                assert_eq!(stats.processed_length1, 0);
                assert_eq!(stats.processed_length2, 0);
                assert_eq!(stats.max_length_used, 0);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(result.text1_length, 5);
        assert_eq!(result.similarity, 100.0);
    }

    #[test]
    fn test_jaccard_uses_normalized_text() {
        let cmp = Comparator::new(ComparisonConfig {
            ngram_size: 1,
            ..Default::default()
        })
        .unwrap();
        // stopwords vanish before tokenization
        let result = cmp.compare_jaccard("The a, b and c", "b c d of the");

        match &result.outcome {
            Outcome::NGram(stats) => {
                assert_eq!(stats.ngram_size, 1);
                assert_eq!(stats.ngrams1_count, 2);
                assert_eq!(stats.ngrams2_count, 3);
                assert_eq!(stats.common_ngrams, 2);
                assert_eq!(stats.union_size, 3);
                assert_eq!(stats.sample_common_ngrams.len(), 2);
                assert!(stats.sample_common_ngrams.contains(&"b".to_string()));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!((result.similarity - 2.0 / 3.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_jaccard_clamps_ngram_size() {
        let cmp = Comparator::new(ComparisonConfig {
            ngram_size: 50,
            ..Default::default()
        })
        .unwrap();
        let result = cmp.compare_jaccard("one two", "one two");
        match result.outcome {
            Outcome::NGram(stats) => assert_eq!(stats.ngram_size, 10),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(result.similarity, 100.0);
    }

    #[test]
    fn test_compare_dispatch() {
        let cmp = Comparator::default();
        for (name, expected) in [
            ("lcstr", Algorithm::LongestCommonSubstringChunks),
            ("lcs", Algorithm::LongestCommonSubsequenceChunks),
            ("levenshtein", Algorithm::Levenshtein),
            ("Jaccard", Algorithm::Jaccard),
        ] {
            let kind: AlgorithmKind = name.parse().unwrap();
            let result = cmp.compare(kind, "hello world", "hello there").unwrap();
            assert_eq!(result.algorithm, expected);
            assert_eq!(result.algorithm.kind(), kind);
            assert!((0.0..=100.0).contains(&result.similarity));
        }
        assert!("soundex".parse::<AlgorithmKind>().is_err());
    }

    #[test]
    fn test_preprocess() {
        let result = Comparator::default().preprocess("The Cat and THE Dog");
        assert_eq!(result.processed, "cat dog");
        assert_eq!(result.original_length, 19);
        assert_eq!(result.processed_length, 7);
    }

    #[test]
    fn test_result_serializes_flat_record() {
        let cmp = comparator(MatchMode::Chunked, 3);
        let result = cmp.compare_substring("abcdef", "xxcdef").unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["algorithm"], "Longest Common Substring (Chunks)");
        assert_eq!(json["substring"], "def");
        assert_eq!(json["length"], 3);
        assert_eq!(json["chunksProcessed"], 4);
        assert_eq!(json["text1Length"], 6);
        assert_eq!(json["text2Length"], 6);

        let result = Comparator::default().compare_jaccard("a b c", "b c d");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["algorithm"], "Jaccard Similarity (N-Grams)");
        assert_eq!(json["nGramaSize"], 5);
        assert_eq!(json["nGramas1Count"], 1);
        assert_eq!(json["commonNGramas"], 0);
        assert_eq!(json["unionSize"], 2);
        assert!(json["sampleCommonNGramas"].as_array().unwrap().is_empty());

        let result = Comparator::default().compare_levenshtein("abc", "abd");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["distance"], 1);
        assert_eq!(json["processedLength1"], 3);
        assert_eq!(json["maxLengthUsed"], 3);
        assert!(json.get("chunksProcessed").is_none());
    }
}
