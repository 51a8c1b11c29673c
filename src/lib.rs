// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy retrieval and ranking over an in-memory candidate snapshot.
//!
//! A caller hands over a query (free text or a tag set) and a fresh snapshot of
//! candidates (id, optional title, description, tags). The engine returns a
//! small, capped list of `(id, score)` rows in a total order. Nothing is
//! indexed, cached or mutated between calls.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌────────────────┐
//! │  utils.rs  │──▶│   fuzzy/     │──▶│   scoring/     │
//! │ (normalize,│   │ (levenshtein,│   │ (boost, blend, │
//! │  fold)     │   │  soft_dice)  │   │  ranking order)│
//! └────────────┘   └──────────────┘   └────────────────┘
//!        │                ▲                   │
//!        ▼                │                   ▼
//! ┌────────────┐   ┌──────────────┐   ┌────────────────┐
//! │ tokenize.rs│───┘              └───│    search/     │
//! │            │                      │ (text, tags,   │
//! └────────────┘                      │  page, rank)   │
//!                                     └────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use fuzzrank::{rank, Candidate, Query, RankOptions};
//!
//! let candidates = vec![
//!     Candidate::new("door").with_title("Wooden Door Mk2").with_tags(["door", "wood"]),
//!     Candidate::new("wall").with_title("Stone Wall").with_tags(["wall", "stone"]),
//! ];
//!
//! let matches = rank(&Query::text("wooden door"), &candidates, &RankOptions::default());
//! assert_eq!(matches.ids().first(), Some(&"door"));
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod tokenize;
mod types;
mod utils;

pub use config::{
    RankOptions, TagRankOptions, TextProfile, TextRankOptions, CONTAINMENT_BOOST,
    DEFAULT_MIN_SCORE, DEFAULT_PAGE_SIZE, DEFAULT_TITLE_WEIGHT, DEFAULT_TOKEN_THRESHOLD,
    DEFAULT_TOP_N, MIN_TOKEN_LEN,
};
pub use error::{Error, Result};
pub use fuzzy::{
    distance, normalized_similarity, soft_dice, soft_dice_with_threshold, SimilarityMemo,
};
pub use scoring::containment_boost;
pub use search::{
    candidates_with_all_tags, paginate, rank, rank_request, substring_matches, tag_frequencies,
    top_name_matches, top_tag_matches, top_text_matches, Page, RankRequest, RequestQuery,
};
pub use tokenize::{tokenize, tokenize_with, TokenizerOptions};
pub use types::{Candidate, Matches, Query, TagMatch, TextMatch};
pub use utils::{normalize_key, normalize_tag_set};
