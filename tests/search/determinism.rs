//! Repeated calls over the same snapshot give identical output, whatever the
//! input order or thread scheduling.

use fuzzrank::{top_tag_matches, top_text_matches, TagRankOptions, TextRankOptions};

use crate::common::synthetic_catalogue;

#[test]
fn test_text_ranking_repeatable() {
    let catalogue = synthetic_catalogue(500);
    let options = TextRankOptions::default();
    let first = top_text_matches("oak door", &catalogue, &options);
    for _ in 0..5 {
        assert_eq!(top_text_matches("oak door", &catalogue, &options), first);
    }
    assert!(!first.is_empty());
}

#[test]
fn test_text_ranking_ignores_input_order() {
    let catalogue = synthetic_catalogue(300);
    let mut reversed = catalogue.clone();
    reversed.reverse();

    let options = TextRankOptions::default();
    assert_eq!(
        top_text_matches("pine chest", &catalogue, &options),
        top_text_matches("pine chest", &reversed, &options)
    );
}

#[test]
fn test_tag_ranking_ignores_input_order() {
    let catalogue = synthetic_catalogue(300);
    let mut reversed = catalogue.clone();
    reversed.reverse();

    let options = TagRankOptions::default();
    let forward = top_tag_matches(&["glass", "lamp"], &catalogue, &options);
    assert_eq!(forward, top_tag_matches(&["glass", "lamp"], &reversed, &options));
    assert_eq!(forward.len(), 25);
}

#[test]
fn test_tag_query_order_irrelevant() {
    let catalogue = synthetic_catalogue(120);
    let options = TagRankOptions::default();
    assert_eq!(
        top_tag_matches(&["iron", "wall"], &catalogue, &options),
        top_tag_matches(&["WALL", "iron", "wall"], &catalogue, &options)
    );
}
