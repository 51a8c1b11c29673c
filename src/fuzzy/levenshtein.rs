// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the [0, 1] similarity built on it.
//!
//! Classic Levenshtein over Unicode scalar values with two rolling rows. The
//! shorter string always indexes the row, so memory is O(min(|a|, |b|)) while
//! time stays O(|a|·|b|).
//!
//! Case folding is per character (see [`fold_char`]) rather than lowercasing
//! the whole string first, so a folded string never changes length.

use crate::utils::fold_char;

/// Levenshtein distance between `a` and `b`.
///
/// Symmetric: `distance(a, b, ci) == distance(b, a, ci)`.
pub fn distance(a: &str, b: &str, case_insensitive: bool) -> usize {
    let a = to_chars(a, case_insensitive);
    let b = to_chars(b, case_insensitive);
    distance_chars(&a, &b)
}

/// `1 - distance / max(|a|, |b|)`.
///
/// Two empty strings are identical (1.0). Empty against non-empty is 0.0.
pub fn normalized_similarity(a: &str, b: &str, case_insensitive: bool) -> f64 {
    let a = to_chars(a, case_insensitive);
    let b = to_chars(b, case_insensitive);
    similarity_chars(&a, &b)
}

/// Upper bound on the similarity of strings with these lengths.
///
/// Length difference is a lower bound on edit distance, so this never
/// under-estimates. Lets callers skip the DP when a threshold is out of reach.
#[inline]
pub fn similarity_upper_bound(a_len: usize, b_len: usize) -> f64 {
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        return 1.0;
    }
    1.0 - a_len.abs_diff(b_len) as f64 / max_len as f64
}

pub(crate) fn similarity_chars(a: &[char], b: &[char]) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }
    let max_len = a.len().max(b.len());
    1.0 - distance_chars(a, b) as f64 / max_len as f64
}

pub(crate) fn distance_chars(a: &[char], b: &[char]) -> usize {
    // Columns follow the shorter string
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            let substitution = prev[j] + cost;
            curr[j + 1] = deletion.min(insertion).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

pub(crate) fn to_chars(value: &str, case_insensitive: bool) -> Vec<char> {
    if case_insensitive {
        value.chars().map(fold_char).collect()
    } else {
        value.chars().collect()
    }
}
