//! Longest Common Subsequence
//!
//! # Time Complexity
//! O(m × n)
//!
//! # Space Complexity
//! O(m × n) for [`longest_common_subsequence`] (the full table is needed for
//! the backtrace), O(min(m, n)) for [`lcs_length`]
//!
//! # Backtrace
//! The reconstruction is deterministic: on a mismatch it moves toward the
//! neighbour with the strictly greater value and, on a tie, consumes a
//! character of `b`. Different tie rules yield different (equally long)
//! subsequences, so this one is fixed.

/// Find the longest order-preserving sequence of characters common to `a`
/// and `b`.
///
/// # Algorithm
/// `cell[i][j]` = LCS length of `a[..i]` and `b[..j]`:
/// - matching characters: diagonal + 1
/// - otherwise: `max(up, left)`
///
/// The backtrace starts at `(|a|, |b|)` and prepends each matched character.
///
/// # Example
/// ```
/// use comparo_core::nlp::subsequence::longest_common_subsequence;
///
/// assert_eq!(longest_common_subsequence("ABCBDAB", "BDCABA"), "BDAB");
/// assert_eq!(longest_common_subsequence("AGGTAB", "GXTXAYB"), "GTAB");
/// ```
pub fn longest_common_subsequence(a: &str, b: &str) -> String {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();
    if m == 0 || n == 0 {
        return String::new();
    }

    // Flat (m + 1) × (n + 1) table, row-major
    let width = n + 1;
    let mut table = vec![0usize; (m + 1) * width];

    for i in 1..=m {
        for j in 1..=n {
            table[i * width + j] = if a_chars[i - 1] == b_chars[j - 1] {
                table[(i - 1) * width + (j - 1)] + 1
            } else {
                table[(i - 1) * width + j].max(table[i * width + (j - 1)])
            };
        }
    }

    let mut subsequence = Vec::with_capacity(table[m * width + n]);
    let (mut i, mut j) = (m, n);

    while i > 0 && j > 0 {
        if a_chars[i - 1] == b_chars[j - 1] {
            subsequence.push(a_chars[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[(i - 1) * width + j] > table[i * width + (j - 1)] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    subsequence.iter().rev().collect()
}

/// Length of the longest common subsequence using two rolling rows.
///
/// # Example
/// ```
/// use comparo_core::nlp::subsequence::lcs_length;
///
/// assert_eq!(lcs_length("ABCBDAB", "BDCABA"), 4);
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Keep the shorter string in the inner loop
    let (outer, inner) = if a_chars.len() >= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let mut prev = vec![0usize; inner.len() + 1];
    let mut curr = vec![0usize; inner.len() + 1];

    for &co in outer.iter() {
        for (j, &ci) in inner.iter().enumerate() {
            curr[j + 1] = if co == ci {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_common_subsequence_exact_string() {
        // Other LCS of length 4 exist (BCBA, BCAB); the tie rule picks BDAB
        assert_eq!(longest_common_subsequence("ABCBDAB", "BDCABA"), "BDAB");
        assert_eq!(longest_common_subsequence("AGGTAB", "GXTXAYB"), "GTAB");
        assert_eq!(longest_common_subsequence("abc", "acb"), "ac");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(longest_common_subsequence("", "abc"), "");
        assert_eq!(longest_common_subsequence("abc", ""), "");
        assert_eq!(longest_common_subsequence("abc", "xyz"), "");
        assert_eq!(lcs_length("", ""), 0);
    }

    #[test]
    fn test_identity() {
        for s in ["a", "banana", "quick brown fox"] {
            assert_eq!(longest_common_subsequence(s, s), s);
            assert_eq!(lcs_length(s, s), s.len());
        }
    }

    #[test]
    fn test_length_agrees_with_backtrace() {
        let pairs = [
            ("ABCBDAB", "BDCABA"),
            ("quick brown fox jumps over lazy dog", "quick brown dog jumps over lazy fox"),
            ("kitten", "sitting"),
            ("a", "bbbbbbba"),
        ];
        for (a, b) in pairs {
            let lcs = longest_common_subsequence(a, b);
            assert_eq!(lcs.len(), lcs_length(a, b));
            assert_eq!(lcs_length(a, b), lcs_length(b, a));
        }
    }

    #[test]
    fn test_normalized_sentences() {
        let a = "quick brown fox jumps over lazy dog";
        let b = "quick brown dog jumps over lazy fox";
        assert_eq!(
            longest_common_subsequence(a, b),
            "quick brown o jumps over lazy o"
        );
    }
}
