// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalization helpers shared by the scorers.
//!
//! Keys are normalized once on the way in (trim + lowercase). After that every
//! map and set in the engine uses plain value equality, no case-insensitive
//! comparers anywhere.

use std::collections::BTreeSet;

/// Normalize a tag or key: trim surrounding whitespace, then lowercase.
///
/// Idempotent: `normalize_key(&normalize_key(s)) == normalize_key(s)`.
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalize and de-duplicate a tag collection. Blank tags are dropped.
///
/// Returns an ordered set so that anything summed over it is summed in the
/// same order on every run.
pub fn normalize_tag_set<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| normalize_key(tag.as_ref()))
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Lowercase a single character when it maps to exactly one character.
///
/// Folding per character keeps lengths stable, which the edit distance needs.
/// Characters whose lowercase form expands (e.g. `İ`) are left alone.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Fold every character of `value` with [`fold_char`].
pub fn fold_str(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

/// Case-insensitive substring test. Empty needles never match.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() || haystack.is_empty() {
        return false;
    }
    fold_str(haystack).contains(&fold_str(needle))
}

/// Clamp into [0, 1]. NaN maps to 0 so it can never leak into a sort key.
#[inline]
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
