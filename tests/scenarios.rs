//! End-to-end scenarios over the public API.
//!
//! Uses wagering lines taken from published prediction data, both
//! correct and known-bad.

use bet_points::{
    add_points_to_bet, compute_bet_points, fix_all_bet_points, parse, validate_bet_points,
    BetEntry, BetError, PointValidation,
};
use serde_json::json;

/// (line, expected points) pairs from a real race card.
const CARD: &[(&str, u64)] = &[
    ("13 ⇔ 1,2,8,9　8点", 8),
    ("12 ⇔ 1,2,3,5,6,7,8,9,11　18点", 18),
    ("4 ⇔ 2,5　4点", 4),
    ("2 ⇔ 1,3,6,7,9,13,14　7点", 14),
    ("1 ⇔ 2,5,6,8,10　5点", 10),
    ("5 ⇔ 2,4　2点", 4),
    ("9 ⇔ 1,3,5,7,8,10,11　7点", 14),
    ("11 ⇔ 1,3,5,8,9,10,12,13　8点", 16),
    ("6 ⇔ 1,2,3,4,5,7,8,10,12　9点", 18),
    ("10 ⇔ 2,4,6,7,9,13,14　7点", 14),
];

#[test]
fn test_two_way_annotation_valid() {
    let v = validate_bet_points("13 ⇔ 1,2,8,9　8点").unwrap();
    assert!(v.is_valid);
    assert_eq!(compute_bet_points("13 ⇔ 1,2,8,9　8点").unwrap(), 8);
}

#[test]
fn test_known_bad_line() {
    let line = "2 ⇔ 1,3,6,7,9,13,14　7点";
    assert_eq!(
        validate_bet_points(line).unwrap(),
        PointValidation { is_valid: false, expected: 14, actual: Some(7) }
    );
    assert_eq!(add_points_to_bet(line).unwrap(), "2 ⇔ 1,3,6,7,9,13,14　14点");
}

#[test]
fn test_undercounted_pair() {
    assert_eq!(add_points_to_bet("5 ⇔ 2,4　2点").unwrap(), "5 ⇔ 2,4　4点");
}

#[test]
fn test_unannotated_one_way() {
    let line = "4 → 1,3,5";
    assert_eq!(
        validate_bet_points(line).unwrap(),
        PointValidation { is_valid: false, expected: 3, actual: None }
    );
    assert_eq!(add_points_to_bet(line).unwrap(), "4 → 1,3,5　3点");
}

#[test]
fn test_missing_separator_single_and_batch() {
    assert!(matches!(
        parse("4 1,3,5"),
        Err(BetError::AmbiguousOrMissingSeparator(_))
    ));
    let out = fix_all_bet_points(vec![BetEntry::from("4 1,3,5")]);
    assert_eq!(out, vec![BetEntry::Text("4 1,3,5".into())]);
}

#[test]
fn test_batch_preserves_shapes() {
    let input: Vec<BetEntry> =
        serde_json::from_value(json!(["13 ⇔ 1,2,8,9　8点", { "numbers": "5 ⇔ 2,4　2点" }, 42]))
            .unwrap();
    let out = fix_all_bet_points(input);
    assert_eq!(
        serde_json::to_value(out).unwrap(),
        json!(["13 ⇔ 1,2,8,9　8点", { "numbers": "5 ⇔ 2,4　4点" }, 42])
    );
}

#[test]
fn test_race_card() {
    for &(line, expected) in CARD {
        assert_eq!(compute_bet_points(line).unwrap(), expected, "{line}");

        let fixed = add_points_to_bet(line).unwrap();
        assert!(fixed.ends_with(&format!("　{expected}点")), "{fixed}");
        assert!(validate_bet_points(&fixed).unwrap().is_valid, "{fixed}");
        assert_eq!(add_points_to_bet(&fixed).unwrap(), fixed);
    }
}

#[test]
fn test_formula_one_way_and_two_way() {
    for a in 1..=3usize {
        for b in 1..=6usize {
            let axis: Vec<String> = (1..=a).map(|h| h.to_string()).collect();
            let partner: Vec<String> = (10..10 + b).map(|h| h.to_string()).collect();
            let one = format!("{} → {}", axis.join(","), partner.join(","));
            let two = format!("{} ⇔ {}", axis.join(","), partner.join(","));
            assert_eq!(compute_bet_points(&one).unwrap(), (a * b) as u64);
            assert_eq!(compute_bet_points(&two).unwrap(), (2 * a * b) as u64);
        }
    }
}

#[test]
fn test_permuted_partners() {
    let a = compute_bet_points("4 ⇔ 5,8,10,13").unwrap();
    let b = compute_bet_points("4 ⇔ 13,10,8,5").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_expected_ignores_annotation() {
    let v = validate_bet_points("7 ⇔ 6,8　40点").unwrap();
    assert!(!v.is_valid);
    assert_eq!(v.expected, 4);
    assert_eq!(v.actual, Some(40));
}
