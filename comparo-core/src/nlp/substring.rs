//! Longest Common Substring
//!
//! # Time Complexity
//! O(m × n) where m, n are string lengths
//!
//! # Space Complexity
//! O(n): only the previous row of the suffix table is needed to extend a run
//!
//! # Ties
//! End positions are scanned row-major (over `a`, then `b`). A run replaces
//! the current best only if it is strictly longer, so the earliest run of the
//! maximum length is returned.

/// Find the longest contiguous run of characters shared by `a` and `b`.
///
/// # Algorithm
/// `cell[i][j]` = length of the common suffix ending at `a[i]`, `b[j]`:
/// - equal characters: diagonal predecessor + 1 (0 outside the table)
/// - otherwise: 0
///
/// The running maximum and its end index in `a` select the slice returned.
///
/// # Returns
/// The substring, or an empty string if either input is empty or they share
/// no character.
///
/// # Example
/// ```
/// use comparo_core::nlp::substring::longest_common_substring;
///
/// assert_eq!(longest_common_substring("abcdef", "zcdefg"), "cdef");
/// assert_eq!(longest_common_substring("abc", "xyz"), "");
/// ```
pub fn longest_common_substring(a: &str, b: &str) -> String {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (end, len) = longest_run(&a_chars, &b_chars);
    a_chars[end - len..end].iter().collect()
}

/// Length of the longest common substring.
#[inline]
pub fn longest_common_substring_len(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    longest_run(&a_chars, &b_chars).1
}

/// Returns `(end_exclusive_in_a, length)` of the first longest run.
fn longest_run(a: &[char], b: &[char]) -> (usize, usize) {
    let n = b.len();

    // Column 0 stays 0: the left border of the table
    let mut prev: Vec<usize> = vec![0; n + 1];
    let mut curr: Vec<usize> = vec![0; n + 1];

    let mut best_len = 0;
    let mut best_end = 0;

    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };

            if curr[j + 1] > best_len {
                best_len = curr[j + 1];
                best_end = i + 1;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (best_end, best_len)
}
