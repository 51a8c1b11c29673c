//! Text ranking: blending, filtering, ordering and the name-only profile.

use fuzzrank::{
    substring_matches, top_name_matches, top_text_matches, Candidate, TextProfile,
    TextRankOptions,
};

use crate::common::{assert_close, door_catalogue, make_candidate, make_titled};

fn ids(matches: &[fuzzrank::TextMatch]) -> Vec<&str> {
    matches.iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn test_wooden_door_ranking() {
    let results = top_text_matches("wooden door", &door_catalogue(), &TextRankOptions::default());

    assert_eq!(ids(&results), vec!["door-01", "door-04", "door-02", "door-03"]);
    // 0.7 * (1 - 4/15 + 0.05) + 0.3 * (0.8 + 0.05)
    assert_close(results[0].score, 0.7 * (1.0 - 4.0 / 15.0 + 0.05) + 0.3 * 0.85);
}

#[test]
fn test_results_carry_candidate_fields() {
    let results = top_text_matches("wooden door", &door_catalogue(), &TextRankOptions::default());
    let top = &results[0];
    assert_eq!(top.title.as_deref(), Some("Wooden Door Mk2"));
    assert_eq!(top.description.as_deref(), Some("A sturdy wooden door"));
}

#[test]
fn test_min_score_filters_weak_rows() {
    let options = TextRankOptions {
        min_score: 0.6,
        ..TextRankOptions::default()
    };
    let results = top_text_matches("wooden door", &door_catalogue(), &options);
    assert_eq!(ids(&results), vec!["door-01", "door-04"]);
    assert!(results.iter().all(|m| m.score >= 0.6));
}

#[test]
fn test_top_n_caps_results() {
    let options = TextRankOptions {
        top_n: 2,
        ..TextRankOptions::default()
    };
    let results = top_text_matches("wooden door", &door_catalogue(), &options);
    assert_eq!(ids(&results), vec!["door-01", "door-04"]);

    let none = TextRankOptions {
        top_n: 0,
        ..TextRankOptions::default()
    };
    assert!(top_text_matches("wooden door", &door_catalogue(), &none).is_empty());
}

#[test]
fn test_equal_scores_break_on_title_then_id() {
    let candidates = vec![
        make_titled("z", "Lead Chest"),
        make_titled("b", "Iron Chest"),
        make_titled("a", "Iron Chest"),
        // No title sorts as the empty string
        Candidate::new("m").with_description("chest chest"),
    ];
    let options = TextRankOptions {
        title_weight: 1.0,
        min_score: 0.0,
        ..TextRankOptions::default()
    };
    let results = top_text_matches("chest", &candidates, &options);

    // Every titled row scores 1 - 5/10 + 0.05
    assert_eq!(ids(&results), vec!["a", "b", "z", "m"]);
    assert_close(results[0].score, 0.55);
    assert_eq!(results[0].score, results[2].score);
    assert_eq!(results[3].score, 0.0);
}

#[test]
fn test_missing_title_sorts_before_titles_on_tie() {
    let candidates = vec![
        make_candidate("t", "Chest", "x"),
        Candidate::new("u").with_description("chest"),
    ];
    // Title only for "t", description only for "u"; both clamp to 1 at w = 0.5
    let options = TextRankOptions {
        title_weight: 0.5,
        ..TextRankOptions::default()
    };
    let results = top_text_matches("chest", &candidates, &options);
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(ids(&results), vec!["u", "t"]);
}

#[test]
fn test_title_weight_is_clamped() {
    let heavy = TextRankOptions {
        title_weight: 5.0,
        ..TextRankOptions::default()
    };
    let full = TextRankOptions {
        title_weight: 1.0,
        ..TextRankOptions::default()
    };
    assert_eq!(
        top_text_matches("wooden door", &door_catalogue(), &heavy),
        top_text_matches("wooden door", &door_catalogue(), &full)
    );
}

#[test]
fn test_empty_inputs() {
    let options = TextRankOptions::default();
    assert!(top_text_matches("door", &[], &options).is_empty());
    // Empty query: titles score 0 and descriptions have no query tokens
    assert!(top_text_matches("", &door_catalogue(), &options).is_empty());
}

#[test]
fn test_name_only_ignores_descriptions() {
    let candidates = vec![
        make_candidate("title-hit", "Wooden Door", "unrelated"),
        make_candidate("desc-hit", "Brass Bell", "wooden door wooden door"),
    ];
    let results = top_name_matches("wooden door", &candidates, &TextRankOptions::default());
    assert_eq!(ids(&results), vec!["title-hit"]);
    assert_close(results[0].score, 1.0);
}

#[test]
fn test_name_only_profile_matches_helper() {
    let options = TextRankOptions {
        profile: TextProfile::NameOnly,
        ..TextRankOptions::default()
    };
    assert_eq!(
        top_text_matches("wooden door", &door_catalogue(), &options),
        top_name_matches("wooden door", &door_catalogue(), &TextRankOptions::default())
    );
}

#[test]
fn test_substring_matches_in_input_order() {
    let catalogue = door_catalogue();
    let hits: Vec<&str> = substring_matches("DOOR", &catalogue)
        .into_iter()
        .map(|c| c.id.as_str())
        .collect();
    // "Wodden Dor" is a fuzzy match, not a substring one
    assert_eq!(hits, vec!["door-02", "door-01", "door-03"]);
    assert!(substring_matches("", &catalogue).is_empty());
}

#[test]
fn test_nan_title_weight_ranks_on_description() {
    let options = TextRankOptions {
        title_weight: f64::NAN,
        ..TextRankOptions::default()
    };
    let zero = TextRankOptions {
        title_weight: 0.0,
        ..TextRankOptions::default()
    };
    let results = top_text_matches("wooden door", &door_catalogue(), &options);
    assert_eq!(results, top_text_matches("wooden door", &door_catalogue(), &zero));
    assert!(results.iter().all(|m| m.score.is_finite()));
}
