//! Soft Dice overlap between query and description tokens.

use fuzzrank::{soft_dice, soft_dice_with_threshold, SimilarityMemo};
use fuzzrank::fuzzy::soft_dice_tokens;
use fuzzrank::tokenize;

use crate::common::assert_close;

#[test]
fn test_exact_overlap_is_plain_dice() {
    // Q = [wooden, door], D = [sturdy, wooden, door]
    assert_close(soft_dice("wooden door", "A sturdy wooden door"), 0.8);
}

#[test]
fn test_misspelling_within_threshold_matches() {
    // cabinat ~ cabinet at 1 - 1/7
    assert_close(soft_dice("cabinet", "oak cabinat with drawers"), 0.5);
}

#[test]
fn test_threshold_controls_soft_matches() {
    assert_eq!(soft_dice("houze", "house"), 0.0);
    assert_eq!(soft_dice_with_threshold("houze", "house", 0.8), 1.0);
}

#[test]
fn test_empty_sides_score_zero() {
    assert_eq!(soft_dice("", "door"), 0.0);
    assert_eq!(soft_dice("door", ""), 0.0);
    assert_eq!(soft_dice("the of", "door"), 0.0);
}

#[test]
fn test_description_duplicates_collapse() {
    // D is de-duplicated to [door]
    assert_eq!(soft_dice("door", "door door door"), 1.0);
}

#[test]
fn test_memo_reused_across_descriptions() {
    let query = tokenize("cabinet");
    let mut memo = SimilarityMemo::new();
    let first = soft_dice_tokens(&query, "cabinat", 0.84, &mut memo);
    let cached = memo.len();
    let second = soft_dice_tokens(&query, "cabinat", 0.84, &mut memo);
    assert_eq!(first, second);
    assert_eq!(memo.len(), cached);
}
