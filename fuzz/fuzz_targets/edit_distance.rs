// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and normalized similarity.
//!
//! Distance is a metric over chars: symmetric, zero only on equal strings and
//! bounded by the longer length. Similarity must stay inside [0, 1] for any
//! input, including multi-byte and case-expanding characters.

#![no_main]

use arbitrary::Arbitrary;
use fuzzrank::{distance, normalized_similarity};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a_bytes: Vec<u8>,
    b_bytes: Vec<u8>,
    case_insensitive: bool,
}

fn capped(bytes: &[u8], max_chars: usize) -> String {
    String::from_utf8_lossy(bytes).chars().take(max_chars).collect()
}

fuzz_target!(|input: DistanceInput| {
    let a = capped(&input.a_bytes, 64);
    let b = capped(&input.b_bytes, 64);
    let ci = input.case_insensitive;

    let d_ab = distance(&a, &b, ci);
    let d_ba = distance(&b, &a, ci);
    assert_eq!(d_ab, d_ba, "distance not symmetric for {:?} / {:?}", a, b);

    let longest = a.chars().count().max(b.chars().count());
    assert!(d_ab <= longest, "distance {} exceeds longer length {}", d_ab, longest);

    if a == b {
        assert_eq!(d_ab, 0);
    }

    let sim = normalized_similarity(&a, &b, ci);
    assert!((0.0..=1.0).contains(&sim), "similarity {} out of range", sim);
    assert_eq!(normalized_similarity(&a, &a, ci), 1.0);
});
