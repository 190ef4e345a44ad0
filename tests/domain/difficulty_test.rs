use quizdoc::domain::{Difficulty, DifficultyError};

#[test]
fn given_padded_value_when_parsing_then_trims_it() {
    assert_eq!(Difficulty::parse("  easy ").unwrap().as_str(), "easy");
}

#[test]
fn given_blank_value_when_parsing_then_returns_empty_error() {
    assert_eq!(Difficulty::parse("   "), Err(DifficultyError::Empty));
}

#[test]
fn given_no_restrictions_when_checking_then_any_value_is_allowed() {
    let difficulty = Difficulty::parse("nightmare").unwrap();
    assert!(difficulty.ensure_allowed(&[]).is_ok());
}

#[test]
fn given_restrictions_when_value_missing_then_lists_allowed_values() {
    let allowed = vec!["easy".to_string(), "hard".to_string()];
    let err = Difficulty::parse("medium")
        .unwrap()
        .ensure_allowed(&allowed)
        .unwrap_err();
    assert_eq!(err.to_string(), "unsupported difficulty 'medium', expected one of: easy, hard");
}
