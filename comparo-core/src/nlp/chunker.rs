//! Fixed-size Text Chunking
//!
//! Splits a text into consecutive, non-overlapping slices of `chunk_size`
//! characters (the last one may be shorter). Boundaries ignore word
//! structure and can fall mid-word; concatenating the chunks in order gives
//! back the input exactly.
//!
//! Chunking caps each quadratic DP table at `chunk_size²` cells.

use crate::error::{ComparisonError, Result};

/// A contiguous slice of a text produced by [`split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Position of this chunk in the sequence
    pub index: usize,
    /// Character offset of the first character in the source text
    pub offset: usize,
    text: &'a str,
}

impl<'a> Chunk<'a> {
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in characters.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl AsRef<str> for Chunk<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

fn check_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(ComparisonError::invalid_argument(
            "chunk_size",
            "must be a positive integer, got 0",
        ));
    }
    Ok(())
}

/// Split `text` into chunks of at most `chunk_size` characters.
///
/// # Errors
/// `InvalidArgument` if `chunk_size` is zero.
///
/// # Example
/// ```
/// use comparo_core::nlp::chunker::split;
///
/// let chunks = split("abcdefg", 3).unwrap();
/// let parts: Vec<&str> = chunks.iter().map(|c| c.as_str()).collect();
/// assert_eq!(parts, ["abc", "def", "g"]);
/// ```
pub fn split(text: &str, chunk_size: usize) -> Result<Vec<Chunk<'_>>> {
    check_chunk_size(chunk_size)?;

    let mut chunks = Vec::with_capacity(text.len() / chunk_size + 1);
    let mut start_byte = 0;
    let mut start_char = 0;
    let mut chars_in_chunk = 0;

    for (byte_idx, _) in text.char_indices() {
        if chars_in_chunk == chunk_size {
            chunks.push(Chunk {
                index: chunks.len(),
                offset: start_char,
                text: &text[start_byte..byte_idx],
            });
            start_byte = byte_idx;
            start_char += chars_in_chunk;
            chars_in_chunk = 0;
        }
        chars_in_chunk += 1;
    }

    if chars_in_chunk > 0 {
        chunks.push(Chunk {
            index: chunks.len(),
            offset: start_char,
            text: &text[start_byte..],
        });
    }

    Ok(chunks)
}

/// Number of chunks [`split`] would produce, without building them.
pub fn chunk_count(text: &str, chunk_size: usize) -> Result<usize> {
    check_chunk_size(chunk_size)?;
    Ok(text.chars().count().div_ceil(chunk_size))
}
