//! Tag ranking: IDF-weighted Jaccard, normalization and tie-breaks.

use fuzzrank::search::{smoothed_idf, DocumentFrequencies, IdfTable};
use fuzzrank::{
    candidates_with_all_tags, tag_frequencies, top_tag_matches, TagMatch, TagRankOptions,
};

use crate::common::{assert_close, make_tagged, tagged_catalogue};

fn ids(matches: &[TagMatch]) -> Vec<&str> {
    matches.iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn test_idf_weighted_jaccard_scores() {
    let results = top_tag_matches(&["door", "wood"], &tagged_catalogue(), &TagRankOptions::default());

    // N = 3; door appears twice, every other tag once
    let door = (4.0f64 / 3.0).ln() + 1.0;
    let rare = 2.0f64.ln() + 1.0;
    assert_eq!(ids(&results), vec!["A", "B"]);
    assert_close(results[0].score, (door + rare) / (door + 2.0 * rare));
    assert_close(results[1].score, door / (door + rare));
}

#[test]
fn test_zero_overlap_dropped() {
    let results = top_tag_matches(&["roof"], &tagged_catalogue(), &TagRankOptions::default());
    assert!(results.is_empty());
}

#[test]
fn test_tags_normalized_on_both_sides() {
    let candidates = vec![
        make_tagged("A", &[" Door ", "WOOD", "wood", ""]),
        make_tagged("B", &["door", "wood"]),
    ];
    let results = top_tag_matches(&["DOOR", "Wood", "  "], &candidates, &TagRankOptions::default());
    assert_eq!(ids(&results), vec!["A", "B"]);
    assert_close(results[0].score, 1.0);
    assert_eq!(results[0].score, results[1].score);
}

#[test]
fn test_equal_scores_break_on_id() {
    let candidates = vec![
        make_tagged("c", &["door"]),
        make_tagged("a", &["door"]),
        make_tagged("b", &["door"]),
    ];
    let results = top_tag_matches(&["door"], &candidates, &TagRankOptions::default());
    assert_eq!(ids(&results), vec!["a", "b", "c"]);
}

#[test]
fn test_top_n_caps_results() {
    let candidates: Vec<_> = (0..40)
        .map(|i| make_tagged(&format!("id-{:02}", i), &["door"]))
        .collect();
    let results = top_tag_matches(&["door"], &candidates, &TagRankOptions::default());
    assert_eq!(results.len(), 25);
    assert_eq!(results[0].id, "id-00");
    assert_eq!(results[24].id, "id-24");
}

#[test]
fn test_empty_query_or_snapshot() {
    let options = TagRankOptions::default();
    let no_tags: [&str; 0] = [];
    assert!(top_tag_matches(&no_tags, &tagged_catalogue(), &options).is_empty());
    assert!(top_tag_matches(&["door"], &[], &options).is_empty());
}

#[test]
fn test_untagged_candidates_never_match() {
    let candidates = vec![make_tagged("bare", &[]), make_tagged("door", &["door"])];
    let results = top_tag_matches(&["door"], &candidates, &TagRankOptions::default());
    assert_eq!(ids(&results), vec!["door"]);
}

#[test]
fn test_idf_table_weights() {
    let frequencies = DocumentFrequencies::from_candidates(&tagged_catalogue());
    assert_eq!(frequencies.candidate_count(), 3);
    assert_eq!(frequencies.get("door"), 2);
    assert_eq!(frequencies.get("roof"), 0);

    let idf = IdfTable::new(&frequencies);
    assert_close(idf.weight("door"), smoothed_idf(3, 2));
    // Unseen tags get the df = 0 weight
    assert_close(idf.weight("roof"), 4.0f64.ln() + 1.0);
}

#[test]
fn test_candidates_with_all_tags() {
    let catalogue = tagged_catalogue();
    let hits: Vec<&str> = candidates_with_all_tags(&["Door", "wood"], &catalogue)
        .into_iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(hits, vec!["A"]);

    let doors: Vec<&str> = candidates_with_all_tags(&["door"], &catalogue)
        .into_iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(doors, vec!["A", "B"]);

    assert!(candidates_with_all_tags(&[" "], &catalogue).is_empty());
}

#[test]
fn test_tag_frequencies_sorted_by_tag() {
    let frequencies = tag_frequencies(&tagged_catalogue());
    assert_eq!(
        frequencies,
        vec![
            ("door".to_string(), 2),
            ("interior".to_string(), 1),
            ("stone".to_string(), 1),
            ("wall".to_string(), 1),
            ("wood".to_string(), 1),
        ]
    );
}
