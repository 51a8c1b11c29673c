// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inputs and outputs of a ranking call.
//!
//! | Type        | Role                                              |
//! |-------------|---------------------------------------------------|
//! | `Candidate` | One entry of the caller's snapshot (read only)    |
//! | `Query`     | Text or tag-set query, picks the ranker           |
//! | `TextMatch` | Text ranker output row                            |
//! | `TagMatch`  | Tag ranker output row                             |
//! | `Matches`   | Output of the unified entry point                 |
//!
//! Candidates are supplied fresh on every call and never stored. Outputs are
//! built fresh per call too, and nothing here is mutated after it is produced.

use serde::{Deserialize, Deserializer, Serialize};

/// A retrievable entity: an opaque id plus optional title, description and tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
}

/// An explicit `null` tag list reads as no tags.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Candidate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Title or the empty string.
    #[inline]
    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Description or the empty string.
    #[inline]
    pub fn description_str(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// What the caller is looking for. Each variant has exactly one ranker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    /// Free text scored against titles and descriptions.
    Text { text: String },
    /// A tag set scored by IDF-weighted Jaccard overlap.
    Tags { tags: Vec<String> },
}

impl Query {
    pub fn text(text: impl Into<String>) -> Self {
        Query::Text { text: text.into() }
    }

    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Query::Tags {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// A text ranker result: the candidate's fields plus its blended score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub id: String,
    pub score: f64,
}

/// A tag ranker result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagMatch {
    pub id: String,
    pub score: f64,
}

/// Ranked output of [`crate::rank`], shaped by the query kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "matches", rename_all = "snake_case")]
pub enum Matches {
    Text(Vec<TextMatch>),
    Tags(Vec<TagMatch>),
}

impl Matches {
    /// Ids in rank order.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Matches::Text(matches) => matches.iter().map(|m| m.id.as_str()).collect(),
            Matches::Tags(matches) => matches.iter().map(|m| m.id.as_str()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Matches::Text(matches) => matches.len(),
            Matches::Tags(matches) => matches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
