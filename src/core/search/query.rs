//! Query tokenization and lexical scoring.
//!
//! Scoring is plain substring containment per token: a token longer
//! than three characters found anywhere in the lowercased content
//! adds 2, a shorter one adds 1. Matching ignores word boundaries
//! (`art` matches `party`) and repeated query tokens count again.

/// Tokens longer than this many characters weigh more
const SHORT_TOKEN_MAX_CHARS: usize = 3;

const LONG_TOKEN_WEIGHT: u32 = 2;
const SHORT_TOKEN_WEIGHT: u32 = 1;

/// Lowercase `query` and split it on whitespace runs.
///
/// # Examples
///
/// ```
/// use ragdex::core::search::tokenize;
///
/// assert_eq!(tokenize("  New   York "), vec!["new", "york"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Weight a single matching token contributes
pub fn token_weight(token: &str) -> u32 {
    if token.chars().count() > SHORT_TOKEN_MAX_CHARS {
        LONG_TOKEN_WEIGHT
    } else {
        SHORT_TOKEN_WEIGHT
    }
}

/// Score already-lowercased `content` against lowercased `tokens`
pub fn score_content(content_lower: &str, tokens: &[String]) -> u32 {
    tokens
        .iter()
        .filter(|token| content_lower.contains(token.as_str()))
        .map(|token| token_weight(token))
        .sum()
}
