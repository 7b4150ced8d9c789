//! Shared tokenizer for skill extraction and TF-IDF vectorization.
//!
//! Lowercases and splits on word boundaries while keeping dotted, hyphenated,
//! and symbol-bearing technical tokens intact ("node.js", "c++", "c#", ".net",
//! "ci/cd"). Both the extractor and the vectorizer run on the same token
//! stream so skill hits and term weights never disagree on segmentation.

/// Characters allowed inside a token beyond alphanumerics.
fn is_token_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '.' | '+' | '#' | '-' | '/')
}

/// Splits `text` into lowercase tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in lower.chars() {
        if is_token_char(ch) {
            current.push(ch);
        } else if !current.is_empty() {
            push_token(&mut tokens, std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        push_token(&mut tokens, current);
    }

    tokens
}

/// Strips boundary punctuation that belongs to the sentence, not the token.
/// Trailing '.' and '-' go ("node.js." -> "node.js"); a leading '.' stays so
/// ".net" survives, while leading '-' and '/' are dropped.
fn push_token(tokens: &mut Vec<String>, raw: String) {
    let trimmed = raw
        .trim_end_matches(['.', '-', '/'])
        .trim_start_matches(['-', '/']);
    if trimmed.chars().any(char::is_alphanumeric) {
        tokens.push(trimmed.to_string());
    }
}
