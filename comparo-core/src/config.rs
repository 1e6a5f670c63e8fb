//! Comparison configuration.
//!
//! The algorithm functions in [`crate::nlp`] take every tuning parameter
//! explicitly; this is the one place defaults are defined. Parameters are
//! treated differently on purpose:
//! - `chunk_size` must be positive and is rejected otherwise
//! - `max_length` is optional; when set it must not be negative
//! - `ngram_size` is clamped into `[1, 10]` and never rejected

use crate::error::{ComparisonError, Result};
use crate::nlp::jaccard::{clamp_ngram_size, MAX_NGRAM_SIZE, MIN_NGRAM_SIZE};

/// Default chunk size for chunked substring/subsequence comparison
pub const DEFAULT_CHUNK_SIZE: usize = 5000;

/// Default word n-gram size for Jaccard similarity
pub const DEFAULT_NGRAM_SIZE: usize = 5;

/// How substring and subsequence comparisons treat long texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Split both texts into `chunk_size` pieces. Substrings are searched in
    /// every chunk pair; subsequences only in chunks at the same index, so
    /// matches spanning a boundary or misaligned chunks are missed.
    #[default]
    Chunked,
    /// Compare the whole normalized texts. Memory grows with the product of
    /// their lengths.
    Exact,
}

/// Configuration for a [`crate::Comparator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonConfig {
    /// Chunked (approximate) or exact substring/subsequence search
    pub mode: MatchMode,
    /// Characters per chunk (default: 5000)
    pub chunk_size: usize,
    /// Characters of each normalized text kept for edit distance
    /// (default: `None`, compare the whole texts)
    pub max_length: Option<usize>,
    /// Words per n-gram for Jaccard (default: 5, clamped to 1..=10)
    pub ngram_size: usize,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::Chunked,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_length: None,
            ngram_size: DEFAULT_NGRAM_SIZE,
        }
    }
}

impl ComparisonConfig {
    /// Build a config from untyped integers as received by a binding layer.
    ///
    /// # Errors
    /// `InvalidArgument` if `chunk_size <= 0` or `max_length < 0`.
    ///
    /// # Example
    /// ```
    /// use comparo_core::ComparisonConfig;
    ///
    /// let config = ComparisonConfig::from_raw(100, Some(500), 42).unwrap();
    /// assert_eq!(config.ngram_size, 10);
    /// assert_eq!(config.max_length, Some(500));
    /// assert_eq!(ComparisonConfig::from_raw(100, None, 3).unwrap().max_length, None);
    /// assert!(ComparisonConfig::from_raw(0, Some(500), 3).is_err());
    /// assert!(ComparisonConfig::from_raw(100, Some(-1), 3).is_err());
    /// ```
    pub fn from_raw(chunk_size: i64, max_length: Option<i64>, ngram_size: i64) -> Result<Self> {
        if chunk_size <= 0 {
            return Err(ComparisonError::invalid_argument(
                "chunk_size",
                format!("must be a positive integer, got {chunk_size}"),
            ));
        }
        let max_length = match max_length {
            Some(raw) if raw < 0 => {
                return Err(ComparisonError::invalid_argument(
                    "max_length",
                    format!("must not be negative, got {raw}"),
                ));
            }
            Some(raw) => Some(usize::try_from(raw).map_err(|_| {
                ComparisonError::invalid_argument("max_length", "does not fit in usize")
            })?),
            None => None,
        };

        let ngram_size =
            ngram_size.clamp(MIN_NGRAM_SIZE as i64, MAX_NGRAM_SIZE as i64) as usize;

        Ok(Self {
            chunk_size: usize::try_from(chunk_size).map_err(|_| {
                ComparisonError::invalid_argument("chunk_size", "does not fit in usize")
            })?,
            max_length,
            ngram_size,
            ..Default::default()
        })
    }

    /// Set the match mode.
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check the strictly validated parameters.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ComparisonError::invalid_argument(
                "chunk_size",
                "must be a positive integer, got 0",
            ));
        }
        Ok(())
    }

    /// The n-gram size that will actually be used.
    #[inline]
    pub fn effective_ngram_size(&self) -> usize {
        clamp_ngram_size(self.ngram_size)
    }
}
