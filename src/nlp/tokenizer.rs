//! ASCII-letter tokenization
//!
//! A token is a maximal run of ASCII letters, lower-cased. Every other
//! character — digits, punctuation, whitespace, non-ASCII — is a separator,
//! and separator runs collapse. This matches the normalization applied when
//! the graph is built, so generated text and graph lookups agree.

/// Split text into lowercase alphabetic tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            current.push(c.to_ascii_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
