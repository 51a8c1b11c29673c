// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the text ranker.
//!
//! Whatever the query and titles, results must respect the score floor and
//! the result cap, and come back in the documented total order.

#![no_main]

use arbitrary::Arbitrary;
use fuzzrank::{top_text_matches, Candidate, TextRankOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct TextInput {
    query: String,
    rows: Vec<(Option<String>, Option<String>)>,
    title_weight: f64,
}

fuzz_target!(|input: TextInput| {
    let query: String = input.query.chars().take(48).collect();
    let candidates: Vec<Candidate> = input
        .rows
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, (title, description))| Candidate {
            id: format!("c{:03}", i),
            title: title.map(|t| t.chars().take(48).collect()),
            description: description.map(|d| d.chars().take(128).collect()),
            tags: Vec::new(),
        })
        .collect();

    let options = TextRankOptions {
        title_weight: input.title_weight,
        ..TextRankOptions::default()
    };
    let results = top_text_matches(&query, &candidates, &options);

    assert!(results.len() <= options.top_n);
    for m in &results {
        assert!(m.score >= options.min_score, "score {} under floor", m.score);
        assert!(m.score.is_finite());
    }
    for pair in results.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        assert!(prev.score >= next.score, "results not sorted by score");
        if prev.score == next.score {
            let prev_key = (prev.title.as_deref().unwrap_or(""), prev.id.as_str());
            let next_key = (next.title.as_deref().unwrap_or(""), next.id.as_str());
            assert!(prev_key <= next_key, "tie-break violated");
        }
    }
});
