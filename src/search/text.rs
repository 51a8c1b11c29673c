// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text-query retrieval: title similarity blended with description soft Dice.
//!
//! One [`TextQueryContext`] is built per call. It holds the query, its tokens
//! and the similarity memo, and is dropped when the call returns. Under the
//! `parallel` feature each rayon worker gets its own context via `map_init`,
//! so no mutable state is ever shared.
//!
//! Filtering and ordering are identical for both profiles:
//! drop `score < min_score`, sort with [`compare_text_matches`], keep `top_n`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{TextProfile, TextRankOptions};
use crate::fuzzy::SimilarityMemo;
use crate::scoring::ranking::compare_text_matches;
use crate::scoring::{blend, description_score, title_score};
use crate::tokenize::tokenize;
use crate::types::{Candidate, TextMatch};
use crate::utils::contains_ignore_case;

/// Per-call scoring state for a text query.
#[derive(Debug)]
pub struct TextQueryContext<'a> {
    query: &'a str,
    query_tokens: Vec<String>,
    options: &'a TextRankOptions,
    memo: SimilarityMemo,
}

impl<'a> TextQueryContext<'a> {
    pub fn new(query: &'a str, options: &'a TextRankOptions) -> Self {
        Self {
            query,
            query_tokens: tokenize(query),
            options,
            memo: SimilarityMemo::new(),
        }
    }

    pub fn query_tokens(&self) -> &[String] {
        &self.query_tokens
    }

    pub fn memo(&self) -> &SimilarityMemo {
        &self.memo
    }

    /// Score one candidate under the configured profile.
    pub fn score(&mut self, candidate: &Candidate) -> f64 {
        let title = title_score(
            self.query,
            candidate.title_str(),
            self.options.containment_boost,
        );
        match self.options.profile {
            TextProfile::NameOnly => title,
            TextProfile::Blended => {
                let description = description_score(
                    self.query,
                    &self.query_tokens,
                    candidate.description_str(),
                    self.options,
                    &mut self.memo,
                );
                blend(title, description, self.options.effective_title_weight())
            }
        }
    }

    /// Score a candidate and keep it only if it clears `min_score`.
    fn score_row(&mut self, candidate: &Candidate) -> Option<TextMatch> {
        let score = self.score(candidate);
        (score >= self.options.min_score).then(|| TextMatch {
            title: candidate.title.clone(),
            description: candidate.description.clone(),
            id: candidate.id.clone(),
            score,
        })
    }
}

/// Best text matches for `query`, ordered and capped at `options.top_n`.
///
/// Never returns an entry scoring below `options.min_score`.
pub fn top_text_matches(
    query: &str,
    candidates: &[Candidate],
    options: &TextRankOptions,
) -> Vec<TextMatch> {
    if options.top_n == 0 || candidates.is_empty() {
        return Vec::new();
    }

    #[cfg(feature = "parallel")]
    let mut matches: Vec<TextMatch> = candidates
        .par_iter()
        .map_init(
            || TextQueryContext::new(query, options),
            |context, candidate| context.score_row(candidate),
        )
        .flatten()
        .collect();

    #[cfg(not(feature = "parallel"))]
    let mut matches: Vec<TextMatch> = {
        let mut context = TextQueryContext::new(query, options);
        candidates
            .iter()
            .filter_map(|candidate| context.score_row(candidate))
            .collect()
    };

    matches.sort_by(compare_text_matches);
    matches.truncate(options.top_n);

    tracing::debug!(
        candidates = candidates.len(),
        matches = matches.len(),
        profile = ?options.profile,
        "Ranked text query."
    );

    matches
}

/// [`top_text_matches`] scoring titles only.
pub fn top_name_matches(
    query: &str,
    candidates: &[Candidate],
    options: &TextRankOptions,
) -> Vec<TextMatch> {
    let options = TextRankOptions {
        profile: TextProfile::NameOnly,
        ..options.clone()
    };
    top_text_matches(query, candidates, &options)
}

/// Candidates whose title contains `query` case-insensitively, in input order.
///
/// The query is trimmed first. A blank query matches nothing.
pub fn substring_matches<'c>(query: &str, candidates: &'c [Candidate]) -> Vec<&'c Candidate> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|candidate| contains_ignore_case(candidate.title_str(), query))
        .collect()
}
