//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical candidate builders to avoid duplication.

#![doc(hidden)]

use crate::types::Candidate;

/// Candidate with a title and description, no tags.
pub fn make_candidate(id: &str, title: &str, description: &str) -> Candidate {
    Candidate::new(id)
        .with_title(title)
        .with_description(description)
}

/// Candidate with tags only.
pub fn make_tagged(id: &str, tags: &[&str]) -> Candidate {
    Candidate::new(id).with_tags(tags.iter().copied())
}

/// Candidate with a title only.
pub fn make_titled(id: &str, title: &str) -> Candidate {
    Candidate::new(id).with_title(title)
}
