// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tuning knobs for both rankers.
//!
//! None of these constants has a derivation behind it. They were picked by hand
//! against one asset library and are exposed as overridable defaults, not as
//! truths about a new corpus.
//!
//! | Knob              | Default | Effect                                          |
//! |-------------------|---------|-------------------------------------------------|
//! | `top_n`           | 25      | Result cap after sorting                        |
//! | `min_score`       | 0.20    | Text results below this blended score are dropped |
//! | `title_weight`    | 0.70    | Share of the blend taken by the title score     |
//! | `token_threshold` | 0.84    | Token similarity needed for a soft match        |
//! | `containment_boost` | 0.05  | Additive bonus for verbatim substring hits      |

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Result cap for both rankers.
pub const DEFAULT_TOP_N: usize = 25;

/// Blended scores below this are dropped by the text ranker.
pub const DEFAULT_MIN_SCORE: f64 = 0.20;

/// Weight of the title score in the blend. The description gets the rest.
pub const DEFAULT_TITLE_WEIGHT: f64 = 0.70;

/// Normalized similarity two tokens need to count as a soft match.
pub const DEFAULT_TOKEN_THRESHOLD: f64 = 0.84;

/// Bonus for a case-insensitive substring hit.
pub const CONTAINMENT_BOOST: f64 = 0.05;

/// Page size used when slicing ranked results.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Tokens shorter than this are dropped by the tokenizer.
pub const MIN_TOKEN_LEN: usize = 2;

/// Which fields feed the text score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextProfile {
    /// Title edit similarity blended with description soft Dice.
    #[default]
    Blended,
    /// Title edit similarity only. Same filtering and tie-break as `Blended`.
    NameOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextRankOptions {
    pub top_n: usize,
    pub min_score: f64,
    pub title_weight: f64,
    pub token_threshold: f64,
    pub containment_boost: f64,
    pub profile: TextProfile,
}

impl Default for TextRankOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_score: DEFAULT_MIN_SCORE,
            title_weight: DEFAULT_TITLE_WEIGHT,
            token_threshold: DEFAULT_TOKEN_THRESHOLD,
            containment_boost: CONTAINMENT_BOOST,
            profile: TextProfile::Blended,
        }
    }
}

impl TextRankOptions {
    /// Title weight clamped to [0, 1]. NaN counts as 0.
    pub fn effective_title_weight(&self) -> f64 {
        crate::utils::clamp01(self.title_weight)
    }

    pub fn validate(&self) -> Result<()> {
        check_unit("text.min_score", self.min_score)?;
        check_unit("text.token_threshold", self.token_threshold)?;
        check_finite("text.title_weight", self.title_weight)?;
        check_unit("text.containment_boost", self.containment_boost)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagRankOptions {
    pub top_n: usize,
}

impl Default for TagRankOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Options for every query kind, loadable from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankOptions {
    pub text: TextRankOptions,
    pub tags: TagRankOptions,
}

impl RankOptions {
    /// Parse and validate options from a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let options: RankOptions = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }

    /// Read, parse and validate an options file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        self.text.validate()
    }
}

fn check_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_config(format!("{} must be finite, got {}", name, value)))
    }
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    check_finite(name, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_config(format!("{} must be within [0, 1], got {}", name, value)))
    }
}
