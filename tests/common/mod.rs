//! Shared test utilities and fixtures.

#![allow(dead_code)]

use fuzzrank::Candidate;

// Re-export canonical test utilities from fuzzrank::testing
pub use fuzzrank::testing::{make_candidate, make_tagged, make_titled};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small asset catalogue mixing close, loose and unrelated matches for the
/// query "wooden door".
pub fn door_catalogue() -> Vec<Candidate> {
    vec![
        make_candidate("lamp-01", "Iron Lamp", "bright lamp"),
        make_candidate("door-02", "Pine Door", "pine door"),
        make_candidate("door-01", "Wooden Door Mk2", "A sturdy wooden door"),
        make_candidate("wall-01", "Stone Wall", "grey stone wall"),
        make_candidate("door-03", "Door", "wooden door with iron hinges"),
        make_candidate("door-04", "Wodden Dor", "cheap door"),
        make_candidate("chest-01", "Oak Chest", "wooden chest for storage"),
    ]
}

/// Tagged assets for IDF ranking.
pub fn tagged_catalogue() -> Vec<Candidate> {
    vec![
        make_tagged("A", &["door", "wood", "interior"]),
        make_tagged("B", &["door"]),
        make_tagged("C", &["wall", "stone"]),
    ]
}

/// Synthetic catalogue of `n` assets with rotating titles and tags.
pub fn synthetic_catalogue(n: usize) -> Vec<Candidate> {
    const MATERIALS: &[&str] = &["oak", "pine", "iron", "stone", "glass", "brass"];
    const KINDS: &[&str] = &["door", "chest", "lamp", "wall", "table", "chair"];
    (0..n)
        .map(|i| {
            let material = MATERIALS[i % MATERIALS.len()];
            let kind = KINDS[(i / MATERIALS.len()) % KINDS.len()];
            Candidate::new(format!("asset-{:04}", i))
                .with_title(format!("{} {} {}", material, kind, i % 7))
                .with_description(format!("a {} {} for the {} set", material, kind, i % 3))
                .with_tags([material, kind])
        })
        .collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
