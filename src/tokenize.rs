// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Free text to lowercase alphanumeric tokens.
//!
//! A token is a maximal run of ASCII letters and digits. Everything else,
//! including non-ASCII letters, separates tokens. No stemming, no synonyms.

use crate::config::MIN_TOKEN_LEN;

/// Minimal English stop-words: articles, conjunctions, common prepositions
/// and pronouns.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "for", "of", "to", "in", "on", "at", "by", "from",
    "with", "as", "is", "are", "was", "were", "be", "been", "being", "this", "that", "these",
    "those", "it", "its", "into", "over", "under", "up", "down",
];

#[inline]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Tokenizer settings. The default drops stop-words and tokens under two chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    pub remove_stop_words: bool,
    pub min_len: usize,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            remove_stop_words: true,
            min_len: MIN_TOKEN_LEN,
        }
    }
}

/// Tokenize with the default options.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, TokenizerOptions::default())
}

/// Tokenize `text` into lowercase tokens, in order of appearance.
pub fn tokenize_with(text: &str, options: TokenizerOptions) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|run| !run.is_empty() && run.len() >= options.min_len)
        .map(str::to_ascii_lowercase)
        .filter(|token| !(options.remove_stop_words && is_stop_word(token)))
        .collect()
}
