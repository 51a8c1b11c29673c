// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind text scores.
//!
//! ```text
//! title_score = clamp01(sim(query, title) + boost(query, title))
//! desc_score  = clamp01(soft_dice(query, description) + boost(query, description))
//! blended     = w·title_score + (1 − w)·desc_score        w = clamp01(title_weight)
//! ```
//!
//! The containment boost is small next to the similarity terms: it breaks
//! near-ties in favour of verbatim hits but cannot lift an unrelated field
//! over a close one on its own.

use crate::config::TextRankOptions;
use crate::fuzzy::{normalized_similarity, soft_dice_tokens, SimilarityMemo};
use crate::utils::{clamp01, contains_ignore_case};

/// `boost` if `field` contains `query` case-insensitively, else 0.
///
/// Empty query or field never earns the boost.
#[inline]
pub fn containment_boost_with(query: &str, field: &str, boost: f64) -> f64 {
    if contains_ignore_case(field, query) {
        boost
    } else {
        0.0
    }
}

/// [`containment_boost_with`] using the default boost of 0.05.
#[inline]
pub fn containment_boost(query: &str, field: &str) -> f64 {
    containment_boost_with(query, field, crate::config::CONTAINMENT_BOOST)
}

/// Whole-string title similarity plus containment boost, clamped.
pub fn title_score(query: &str, title: &str, boost: f64) -> f64 {
    clamp01(normalized_similarity(query, title, true) + containment_boost_with(query, title, boost))
}

/// Soft Dice of the description plus containment boost, clamped.
pub fn description_score(
    query: &str,
    query_tokens: &[String],
    description: &str,
    options: &TextRankOptions,
    memo: &mut SimilarityMemo,
) -> f64 {
    let dice = soft_dice_tokens(query_tokens, description, options.token_threshold, memo);
    clamp01(dice + containment_boost_with(query, description, options.containment_boost))
}

/// Weighted blend of the two field scores. `title_weight` is clamped first.
#[inline]
pub fn blend(title_score: f64, description_score: f64, title_weight: f64) -> f64 {
    let weight = clamp01(title_weight);
    weight * title_score + (1.0 - weight) * description_score
}
