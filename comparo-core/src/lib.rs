//! Comparo Core - Classical text similarity over normalized text
//!
//! Compares two texts with longest common substring, longest common
//! subsequence, Levenshtein distance or word n-gram Jaccard similarity.
//! Key design principles:
//!
//! - **Pure**: every operation is an in-memory computation, no I/O
//! - **Bounded memory**: chunking caps each DP table at `chunk_size²` cells
//! - **Total**: empty input yields a defined result; only configuration fails
//! - **Stateless**: nothing is shared or cached between calls

#![warn(clippy::unnecessary_to_owned)]

pub mod compare;
pub mod config;
pub mod error;
pub mod nlp;

pub use compare::{
    Algorithm, AlgorithmKind, ComparisonResult, Comparator, EditDistanceStats, NGramStats,
    Outcome, PreprocessResult, SubsequenceMatch, SubstringMatch,
};
pub use config::{ComparisonConfig, MatchMode};
pub use error::{ComparisonError, Result};
