// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: every ranked list is a total order.
//!
//! Sort keys, in order:
//! 1. **Score** - descending
//! 2. **Title** - ascending, ordinal (text results only; missing title sorts as "")
//! 3. **Id** - ascending, ordinal
//!
//! Scores are compared with `total_cmp`, which is safe because every score that
//! reaches a sort has already been clamped (NaN never gets this far).

use std::cmp::Ordering;

use crate::types::{TagMatch, TextMatch};

/// Compare two text results for ranking.
pub fn compare_text_matches(a: &TextMatch, b: &TextMatch) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| {
            let a_title = a.title.as_deref().unwrap_or("");
            let b_title = b.title.as_deref().unwrap_or("");
            a_title.cmp(b_title)
        })
        .then_with(|| a.id.cmp(&b.id))
}

/// Compare two tag results for ranking. No title key here.
pub fn compare_tag_matches(a: &TagMatch, b: &TagMatch) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}
