// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzrank command-line interface.
//!
//! Four subcommands: `text` and `tags` rank a candidate file against a query,
//! `vocab` lists the tag vocabulary, and `request` runs a full JSON request.
//! Candidate files are JSON arrays of `{id, title?, description?, tags?}`; pass
//! `-` to read from stdin.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fuzzrank",
    about = "Fuzzy retrieval and ranking over asset candidates",
    version
)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). Otherwise FUZZRANK_LOG applies
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidates against a free-text query
    Text {
        /// Path to candidates JSON (or - for stdin)
        candidates: String,

        /// Search query
        query: String,

        /// Results per page [default: 25]
        #[arg(short, long)]
        limit: Option<usize>,

        /// Page index, 0-based
        #[arg(short, long, default_value = "0")]
        page: usize,

        /// Drop results scoring below this
        #[arg(long)]
        min_score: Option<f64>,

        /// Share of the score taken by the title, clamped to [0, 1]
        #[arg(long)]
        title_weight: Option<f64>,

        /// Token similarity needed for a description soft match
        #[arg(long)]
        token_threshold: Option<f64>,

        /// Score titles only
        #[arg(long)]
        name_only: bool,

        /// Path to an options JSON file
        #[arg(short, long)]
        config: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank candidates against a tag set
    Tags {
        /// Path to candidates JSON (or - for stdin)
        candidates: String,

        /// Comma-separated tags
        tags: String,

        /// List candidates carrying every tag instead of ranking
        #[arg(long)]
        all: bool,

        /// Results per page [default: 25]
        #[arg(short, long)]
        limit: Option<usize>,

        /// Page index, 0-based
        #[arg(short, long, default_value = "0")]
        page: usize,

        /// Path to an options JSON file
        #[arg(short, long)]
        config: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List every tag in a candidate file with its document frequency
    Vocab {
        /// Path to candidates JSON (or - for stdin)
        candidates: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank a JSON request ({query, candidates, options}) and print JSON
    Request {
        /// Path to request JSON (or - for stdin)
        file: String,
    },
}

/// Split a comma-separated tag argument. Blank entries are dropped later by
/// normalization.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}
