//! Text Normalization
//!
//! Every comparison runs over a cleaned version of its input:
//! - ASCII letters are lowercased
//! - anything that is not an ASCII letter or a space is dropped
//! - words from a fixed Spanish/English stopword list are removed
//! - surviving words are rejoined with single spaces
//!
//! The number of characters seen *before* filtering is kept alongside the
//! cleaned text; similarity percentages are computed against it.
//!
//! Non-ASCII letters are not treated as alphabetic and are dropped.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Bilingual stopword list (Spanish first, then English).
pub static STOPWORDS: &[&str] = &[
    // Spanish
    "el", "la", "los", "las", "de", "del", "y", "a", "en",
    "por", "para", "con", "sin", "que",
    // English
    "and", "for", "so", "or", "not", "if", "as",
    "the", "an", "to", "of", "at",
];

/// Pre-built stopword lookup set.
static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Cleaned text plus the raw character count of the input it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    text: String,
    original_char_count: usize,
}

impl NormalizedText {
    /// The cleaned text: lowercase ASCII letters and single interior spaces.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters in the input before any filtering.
    #[inline]
    pub fn original_char_count(&self) -> usize {
        self.original_char_count
    }

    /// Length of the cleaned text in characters.
    #[inline]
    pub fn len(&self) -> usize {
        // cleaned text is ASCII only
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Check whether a lowercase word is in the stopword list.
///
/// # Example
/// ```
/// use comparo_core::nlp::normalize::is_stopword;
///
/// assert!(is_stopword("the"));
/// assert!(is_stopword("los"));
/// assert!(!is_stopword("cat"));
/// ```
#[inline]
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

/// Normalize raw text for comparison.
///
/// # Algorithm
/// 1. Count every input character (this is the similarity denominator)
/// 2. Lowercase ASCII letters, keep only letters and `' '`
/// 3. Split on spaces, drop empty words and stopwords
/// 4. Rejoin with single spaces
///
/// Tabs and newlines are not spaces: they are dropped like punctuation, so
/// the words on either side of them are glued together.
///
/// # Example
/// ```
/// use comparo_core::nlp::normalize::normalize;
///
/// let clean = normalize("The Cat and THE Dog");
/// assert_eq!(clean.as_str(), "cat dog");
/// assert_eq!(clean.original_char_count(), 19);
/// ```
pub fn normalize(text: &str) -> NormalizedText {
    let mut original_char_count = 0;
    let mut kept = String::with_capacity(text.len());

    for c in text.chars() {
        original_char_count += 1;

        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphabetic() || c == ' ' {
            kept.push(c);
        }
    }

    let mut cleaned = String::with_capacity(kept.len());
    for word in kept.split(' ') {
        if word.is_empty() || is_stopword(word) {
            continue;
        }
        if !cleaned.is_empty() {
            cleaned.push(' ');
        }
        cleaned.push_str(word);
    }

    NormalizedText {
        text: cleaned,
        original_char_count,
    }
}
