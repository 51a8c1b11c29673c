// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Soft Dice: token overlap that tolerates small misspellings.
//!
//! ```text
//! Q  = tokenize(query)            (duplicates kept)
//! Du = unique(tokenize(text))
//! matches = |{ q ∈ Q : max_{d ∈ Du} sim(q, d) ≥ threshold }|
//! dice    = 2·matches / (|Q| + |Du|), clamped to [0, 1]
//! ```
//!
//! With exact tokens this is plain Dice/F1 overlap. A query token only needs
//! one description token above the threshold, so the inner loop stops at the
//! first hit, and pairs whose length gap alone rules out the threshold are
//! skipped without running the DP.

use std::collections::HashSet;

use super::levenshtein::similarity_upper_bound;
use super::memo::SimilarityMemo;
use crate::config::DEFAULT_TOKEN_THRESHOLD;
use crate::tokenize::tokenize;
use crate::utils::clamp01;

/// Soft Dice of `query` against `text` with the default token threshold.
pub fn soft_dice(query: &str, text: &str) -> f64 {
    soft_dice_with_threshold(query, text, DEFAULT_TOKEN_THRESHOLD)
}

/// Soft Dice of `query` against `text`. 0 when either side has no tokens.
pub fn soft_dice_with_threshold(query: &str, text: &str, threshold: f64) -> f64 {
    let query_tokens = tokenize(query);
    let mut memo = SimilarityMemo::new();
    soft_dice_tokens(&query_tokens, text, threshold, &mut memo)
}

/// Soft Dice with pre-tokenized query tokens and a caller-owned memo.
pub fn soft_dice_tokens(
    query_tokens: &[String],
    text: &str,
    threshold: f64,
    memo: &mut SimilarityMemo,
) -> f64 {
    if query_tokens.is_empty() {
        return 0.0;
    }
    let text_tokens = unique_tokens(tokenize(text));
    if text_tokens.is_empty() {
        return 0.0;
    }

    let matches = query_tokens
        .iter()
        .filter(|query_token| {
            text_tokens.iter().any(|text_token| {
                // Tokens are ASCII, so byte length is char length
                similarity_upper_bound(query_token.len(), text_token.len()) >= threshold
                    && memo.similarity(query_token, text_token) >= threshold
            })
        })
        .count();

    let dice = (2 * matches) as f64 / (query_tokens.len() + text_tokens.len()) as f64;
    clamp01(dice)
}

/// Drop repeated tokens, keeping first occurrences in order.
fn unique_tokens(tokens: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(tokens.len());
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
