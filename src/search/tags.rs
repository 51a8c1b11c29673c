// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tag-query retrieval: IDF-weighted Jaccard overlap.
//!
//! ```text
//! df(t)  = number of candidates whose tag set contains t
//! idf(t) = ln((N + 1) / (df(t) + 1)) + 1          N = candidate count
//! score  = Σ_{t ∈ Q∩T} idf(t) / Σ_{t ∈ Q∪T} idf(t)
//! ```
//!
//! The smoothing keeps every weight strictly positive, including tags carried
//! by every candidate, while rare tags weigh more. Weights come from the
//! snapshot passed to this call and are discarded with the [`TagQueryContext`].
//!
//! Tag sets are `BTreeSet`s after normalization, so the floating point sums
//! run in the same order on every call and results are reproducible bit for bit.

use std::collections::{BTreeMap, BTreeSet, HashMap};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::TagRankOptions;
use crate::scoring::ranking::compare_tag_matches;
use crate::types::{Candidate, TagMatch};
use crate::utils::{clamp01, normalize_tag_set};

/// Smoothed inverse document frequency.
#[inline]
pub fn smoothed_idf(candidate_count: usize, document_frequency: usize) -> f64 {
    ((candidate_count + 1) as f64 / (document_frequency + 1) as f64).ln() + 1.0
}

/// How many candidates carry each normalized tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFrequencies {
    counts: BTreeMap<String, usize>,
    candidate_count: usize,
}

impl DocumentFrequencies {
    /// Count over already-normalized, de-duplicated tag sets.
    pub fn from_tag_sets<'s, I>(tag_sets: I) -> Self
    where
        I: IntoIterator<Item = &'s BTreeSet<String>>,
    {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut candidate_count = 0;
        for tags in tag_sets {
            candidate_count += 1;
            for tag in tags {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        Self {
            counts,
            candidate_count,
        }
    }

    /// Count over raw candidates, normalizing their tags on the way.
    pub fn from_candidates(candidates: &[Candidate]) -> Self {
        let sets: Vec<BTreeSet<String>> = candidates
            .iter()
            .map(|candidate| normalize_tag_set(&candidate.tags))
            .collect();
        Self::from_tag_sets(&sets)
    }

    pub fn get(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Distinct tags, sorted, with their document frequency.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(tag, count)| (tag.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// IDF weight per tag for one call's snapshot.
#[derive(Debug, Clone)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
    candidate_count: usize,
}

impl IdfTable {
    pub fn new(frequencies: &DocumentFrequencies) -> Self {
        let candidate_count = frequencies.candidate_count();
        let weights = frequencies
            .iter()
            .map(|(tag, df)| (tag.to_string(), smoothed_idf(candidate_count, df)))
            .collect();
        Self {
            weights,
            candidate_count,
        }
    }

    /// Weight of `tag`. Tags no candidate carries get the `df = 0` weight.
    pub fn weight(&self, tag: &str) -> f64 {
        self.weights
            .get(tag)
            .copied()
            .unwrap_or_else(|| smoothed_idf(self.candidate_count, 0))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// IDF-weighted Jaccard similarity of two normalized tag sets.
///
/// 0 when the union is empty.
pub fn weighted_jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>, idf: &IdfTable) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let union: f64 = a.iter().map(|tag| idf.weight(tag)).sum::<f64>()
        + b.iter()
            .filter(|tag| !a.contains(*tag))
            .map(|tag| idf.weight(tag))
            .sum::<f64>();

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection: f64 = small
        .iter()
        .filter(|tag| large.contains(*tag))
        .map(|tag| idf.weight(tag))
        .sum();

    if union > 0.0 {
        clamp01(intersection / union)
    } else {
        0.0
    }
}

/// Per-call state for a tag query: normalized sets and the weight table.
#[derive(Debug)]
pub struct TagQueryContext<'c> {
    query: BTreeSet<String>,
    candidates: &'c [Candidate],
    candidate_tags: Vec<BTreeSet<String>>,
    idf: IdfTable,
}

impl<'c> TagQueryContext<'c> {
    pub fn new<S: AsRef<str>>(query_tags: &[S], candidates: &'c [Candidate]) -> Self {
        let query = normalize_tag_set(query_tags);
        let candidate_tags: Vec<BTreeSet<String>> = candidates
            .iter()
            .map(|candidate| normalize_tag_set(&candidate.tags))
            .collect();
        let idf = IdfTable::new(&DocumentFrequencies::from_tag_sets(&candidate_tags));

        tracing::trace!(
            query_tags = query.len(),
            weighted_tags = idf.len(),
            "Built tag weight table."
        );

        Self {
            query,
            candidates,
            candidate_tags,
            idf,
        }
    }

    pub fn query(&self) -> &BTreeSet<String> {
        &self.query
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }

    /// Score of the candidate at `index` in the snapshot.
    pub fn score_at(&self, index: usize) -> f64 {
        self.candidate_tags
            .get(index)
            .map(|tags| weighted_jaccard(&self.query, tags, &self.idf))
            .unwrap_or(0.0)
    }

    fn row(&self, index: usize) -> Option<TagMatch> {
        let score = self.score_at(index);
        (score > 0.0).then(|| TagMatch {
            id: self.candidates[index].id.clone(),
            score,
        })
    }
}

/// Best tag matches for `query_tags`, ordered and capped at `options.top_n`.
///
/// Zero-score candidates are dropped. An empty normalized query or an empty
/// snapshot yields an empty list.
pub fn top_tag_matches<S: AsRef<str>>(
    query_tags: &[S],
    candidates: &[Candidate],
    options: &TagRankOptions,
) -> Vec<TagMatch> {
    if candidates.is_empty() || options.top_n == 0 {
        return Vec::new();
    }
    let context = TagQueryContext::new(query_tags, candidates);
    if context.query().is_empty() {
        return Vec::new();
    }

    #[cfg(feature = "parallel")]
    let mut matches: Vec<TagMatch> = (0..candidates.len())
        .into_par_iter()
        .filter_map(|index| context.row(index))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let mut matches: Vec<TagMatch> = (0..candidates.len())
        .filter_map(|index| context.row(index))
        .collect();

    matches.sort_by(compare_tag_matches);
    matches.truncate(options.top_n);

    tracing::debug!(
        candidates = candidates.len(),
        query_tags = context.query().len(),
        matches = matches.len(),
        "Ranked tag query."
    );

    matches
}

/// Candidates carrying every query tag, in input order.
///
/// Both sides are normalized first. An empty normalized query matches nothing.
pub fn candidates_with_all_tags<'c, S: AsRef<str>>(
    query_tags: &[S],
    candidates: &'c [Candidate],
) -> Vec<&'c Candidate> {
    let query = normalize_tag_set(query_tags);
    if query.is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|candidate| {
            let tags = normalize_tag_set(&candidate.tags);
            query.is_subset(&tags)
        })
        .collect()
}

/// Every distinct normalized tag in the snapshot with its document frequency,
/// sorted by tag.
pub fn tag_frequencies(candidates: &[Candidate]) -> Vec<(String, usize)> {
    DocumentFrequencies::from_candidates(candidates)
        .iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect()
}
