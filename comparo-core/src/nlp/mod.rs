//! NLP Module - Classical Text Similarity Algorithms
//!
//! Normalization, chunking and the four matchers. Every function here is
//! pure: parameters are explicit, nothing is cached between calls.
//!
//! # Algorithms
//!
//! | Algorithm | Module | Time | Memory |
//! |-----------|--------|------|--------|
//! | Longest common substring | [substring] | O(m×n) | O(n) |
//! | Longest common subsequence | [subsequence] | O(m×n) | O(m×n) |
//! | Levenshtein edit distance | [levenshtein] | O(m×n) | O(min(m,n)) |
//! | Word n-gram Jaccard | [jaccard] | O(m+n) | O(m+n) |
//!
//! # Example
//!
//! ```
//! use comparo_core::nlp::normalize::normalize;
//! use comparo_core::nlp::substring::longest_common_substring;
//! use comparo_core::nlp::levenshtein::levenshtein_distance;
//!
//! let a = normalize("The quick brown fox");
//! let b = normalize("A quick brown dog");
//! assert_eq!(longest_common_substring(a.as_str(), b.as_str()), "quick brown ");
//!
//! assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
//! ```

pub mod normalize;
pub mod chunker;
pub mod substring;
pub mod subsequence;
pub mod levenshtein;
pub mod jaccard;

// Re-export main functions for convenience
pub use normalize::{normalize, is_stopword, NormalizedText, STOPWORDS};
pub use chunker::{split, chunk_count, Chunk};
pub use substring::{longest_common_substring, longest_common_substring_len};
pub use subsequence::{longest_common_subsequence, lcs_length};
pub use levenshtein::{levenshtein_distance, levenshtein_similarity, truncate_chars};
pub use jaccard::{jaccard_similarity, word_ngrams, tokenize, clamp_ngram_size, JaccardStats};
