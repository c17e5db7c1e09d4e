//! Word tokenization for line refinement.

/// Split a line into words on whitespace runs.
///
/// Punctuation stays attached to its word, so `"end."` and `"end"` are
/// different tokens.
pub fn split_words(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Check if a token carries no visible text.
pub fn is_blank(token: &str) -> bool {
    token.trim().is_empty()
}
