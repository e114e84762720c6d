//! Form validation scenarios exercised through the public API.

use cards2cash_core::validation::patterns::{email_regex, matches_field, strong_password};
use cards2cash_core::validation::{validate_field, validate_form, FieldRule, FormValues, RuleSet};

fn values(pairs: &[(&str, &str)]) -> FormValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Test: email pattern
// ---------------------------------------------------------------------------

#[test]
fn email_pattern_rejects_bad_and_accepts_good() {
    let rules = RuleSet::new().field("email", FieldRule::new().pattern(email_regex().clone()));

    let errors = validate_form(&values(&[("email", "bad")]), &rules);
    assert!(errors.contains_key("email"));

    let errors = validate_form(&values(&[("email", "a@b.com")]), &rules);
    assert!(!errors.contains_key("email"));
}

// ---------------------------------------------------------------------------
// Test: whitespace-only required field
// ---------------------------------------------------------------------------

#[test]
fn whitespace_only_fails_required() {
    let rule = FieldRule::new().required();
    let error = validate_field("phone", "   ", &rule, &FormValues::new());
    assert_eq!(error.as_deref(), Some("Phone is required"));
}

// ---------------------------------------------------------------------------
// Test: min length boundary
// ---------------------------------------------------------------------------

#[test]
fn min_length_ten() {
    let rule = FieldRule::new().min_length(10);
    let all = FormValues::new();
    assert!(validate_field("phone", "080123456", &rule, &all).is_some());
    assert!(validate_field("phone", "0801234567", &rule, &all).is_none());
}

// ---------------------------------------------------------------------------
// Test: password + confirm password scenario
// ---------------------------------------------------------------------------

#[test]
fn confirm_password_mismatch_is_the_only_error() {
    let rules = RuleSet::new()
        .field(
            "password",
            FieldRule::new().required().min_length(8).custom(strong_password),
        )
        .field(
            "confirmPassword",
            FieldRule::new().custom(|v: &str, all: &FormValues| {
                all.get("password").is_some_and(|p| p == v)
            }),
        );

    let errors = validate_form(
        &values(&[("password", "Abcdef1!"), ("confirmPassword", "different")]),
        &rules,
    );

    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("confirmPassword"));
}

#[test]
fn matches_field_helper_reports_its_message() {
    let rules = RuleSet::new()
        .field("password", FieldRule::new().required())
        .field(
            "confirmPassword",
            FieldRule::new()
                .required()
                .custom(matches_field("password", "Passwords do not match")),
        );

    let errors = validate_form(
        &values(&[("password", "Abcdef1!"), ("confirmPassword", "Abcdef1?")]),
        &rules,
    );
    assert_eq!(
        errors.get("confirmPassword").map(String::as_str),
        Some("Passwords do not match")
    );
}
