// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-call memo of token similarities.
//!
//! Descriptions in an asset library repeat the same vocabulary, so the same
//! (query token, description token) pair comes up for many candidates. The memo
//! belongs to one ranking call (one per worker when scoring in parallel) and is
//! dropped when the call returns. It is never shared across calls.

use std::collections::HashMap;

use super::levenshtein::normalized_similarity;

#[derive(Debug, Default)]
pub struct SimilarityMemo {
    // Nested so lookups can borrow both keys
    scores: HashMap<String, HashMap<String, f64>>,
}

impl SimilarityMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive normalized similarity of `a` and `b`, cached.
    pub fn similarity(&mut self, a: &str, b: &str) -> f64 {
        if let Some(score) = self.scores.get(a).and_then(|row| row.get(b)) {
            return *score;
        }
        let score = normalized_similarity(a, b, true);
        self.scores
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), score);
        score
    }

    /// Number of cached pairs.
    pub fn len(&self) -> usize {
        self.scores.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
