// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Whole-string similarity lives in `levenshtein`. Token-level soft matching for
//! longer text (soft Dice) lives in `soft_dice` and reuses the same distance,
//! memoized per call in a [`SimilarityMemo`].

mod levenshtein;
mod memo;
mod soft_dice;

pub use levenshtein::*;
pub use memo::SimilarityMemo;
pub use soft_dice::*;
