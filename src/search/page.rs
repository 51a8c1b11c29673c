// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-size pages over a ranked list.
//!
//! A page index past the end falls back to the first page rather than
//! returning nothing, so a caller walking pages always gets results back
//! while any exist.

use serde::Serialize;

/// One page of results. `start..end` is the slice of the full list it covers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Take page `page` (0-based) of `page_size` items from `items`.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let total = items.len();
    if page_size == 0 || total == 0 {
        return Page {
            items: Vec::new(),
            start: 0,
            end: 0,
            total,
        };
    }

    let start = match page.checked_mul(page_size) {
        Some(start) if start < total => start,
        _ => 0,
    };
    let end = (start + page_size).min(total);
    let items = items.into_iter().skip(start).take(end - start).collect();

    Page {
        items,
        start,
        end,
        total,
    }
}
