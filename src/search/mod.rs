// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Retrieval entry points.
//!
//! Two rankers, one per query kind:
//!
//! - **text** ([`top_text_matches`]): title edit similarity blended with
//!   description soft Dice, plus containment boosts
//! - **tags** ([`top_tag_matches`]): IDF-weighted Jaccard overlap
//!
//! [`rank`] dispatches on [`Query`]. [`rank_request`] is the same thing behind
//! the JSON request shape, where absent collections are representable and get
//! rejected.

pub mod page;
pub mod tags;
pub mod text;

use serde::{Deserialize, Serialize};

pub use page::{paginate, Page};
pub use tags::{
    candidates_with_all_tags, smoothed_idf, tag_frequencies, top_tag_matches, weighted_jaccard,
    DocumentFrequencies, IdfTable, TagQueryContext,
};
pub use text::{substring_matches, top_name_matches, top_text_matches, TextQueryContext};

use crate::config::RankOptions;
use crate::error::{Error, Result};
use crate::types::{Candidate, Matches, Query};

/// Rank `candidates` against `query` with the ranker its kind calls for.
pub fn rank(query: &Query, candidates: &[Candidate], options: &RankOptions) -> Matches {
    match query {
        Query::Text { text } => Matches::Text(top_text_matches(text, candidates, &options.text)),
        Query::Tags { tags } => {
            Matches::Tags(top_tag_matches(tags.as_slice(), candidates, &options.tags))
        }
    }
}

/// Query as it arrives over the wire. Collections may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestQuery {
    Text {
        #[serde(default)]
        text: Option<String>,
    },
    Tags {
        #[serde(default)]
        tags: Option<Vec<String>>,
    },
}

/// A self-contained ranking request: query, candidate snapshot and options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub query: Option<RequestQuery>,
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    pub options: RankOptions,
}

impl RankRequest {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Validate a request and rank it.
///
/// - no query at all → `InvalidArgument`
/// - tag query without tags or without candidates → `InvalidArgument`
/// - text query without candidates → empty result
/// - text query without text → ranked as the empty string
pub fn rank_request(request: &RankRequest) -> Result<Matches> {
    request.options.validate()?;

    let query = request
        .query
        .as_ref()
        .ok_or(Error::InvalidArgument { name: "query" })?;

    match query {
        RequestQuery::Text { text } => {
            let Some(candidates) = request.candidates.as_deref() else {
                return Ok(Matches::Text(Vec::new()));
            };
            let text = text.as_deref().unwrap_or("");
            Ok(Matches::Text(top_text_matches(text, candidates, &request.options.text)))
        }
        RequestQuery::Tags { tags } => {
            let tags = tags
                .as_deref()
                .ok_or(Error::InvalidArgument { name: "query tags" })?;
            let candidates = request
                .candidates
                .as_deref()
                .ok_or(Error::InvalidArgument { name: "candidates" })?;
            Ok(Matches::Tags(top_tag_matches(tags, candidates, &request.options.tags)))
        }
    }
}
