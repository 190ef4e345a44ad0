use quizdoc::application::services::{is_answer_correct, normalize_answer, similarity_ratio};

#[test]
fn given_punctuated_mixed_case_answer_when_normalizing_then_strips_to_lowercase_alphanumerics() {
    assert_eq!(normalize_answer("  The Sky, is BLUE!  "), "the sky is blue");
}

#[test]
fn given_identical_strings_when_comparing_then_ratio_is_one() {
    assert_eq!(similarity_ratio("blue", "blue"), 1.0);
}

#[test]
fn given_two_empty_strings_when_comparing_then_ratio_is_one() {
    assert_eq!(similarity_ratio("", ""), 1.0);
}

#[test]
fn given_partially_overlapping_strings_when_comparing_then_counts_matching_blocks() {
    assert!((similarity_ratio("abcd", "bcde") - 0.75).abs() < f64::EPSILON);
}

#[test]
fn given_disjoint_strings_when_comparing_then_ratio_is_zero() {
    assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
}

#[test]
fn given_answer_differing_only_in_case_and_punctuation_when_checking_then_is_correct() {
    assert!(is_answer_correct("Blue!", "blue", 0.8));
}

#[test]
fn given_unrelated_answer_when_checking_then_is_incorrect() {
    assert!(!is_answer_correct("green", "blue", 0.8));
}
