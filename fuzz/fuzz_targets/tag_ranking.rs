// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the tag ranker.
//!
//! Scores are a weighted Jaccard ratio so they must land in (0, 1]. Ranking
//! the same snapshot twice must give identical output.

#![no_main]

use arbitrary::Arbitrary;
use fuzzrank::{top_tag_matches, Candidate, TagRankOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct TagInput {
    query: Vec<String>,
    candidates: Vec<Vec<String>>,
}

fuzz_target!(|input: TagInput| {
    let query: Vec<String> = input.query.into_iter().take(16).collect();
    let candidates: Vec<Candidate> = input
        .candidates
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, tags)| Candidate::new(format!("c{:03}", i)).with_tags(tags.into_iter().take(16)))
        .collect();

    let options = TagRankOptions::default();
    let first = top_tag_matches(query.as_slice(), &candidates, &options);
    let second = top_tag_matches(query.as_slice(), &candidates, &options);
    assert_eq!(first, second, "tag ranking is not deterministic");

    assert!(first.len() <= options.top_n);
    for m in &first {
        assert!(m.score > 0.0 && m.score <= 1.0, "score {} out of range", m.score);
    }
    for pair in first.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].id < pair[1].id);
        }
    }
});
