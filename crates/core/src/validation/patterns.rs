//! Reusable field patterns and checks.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use super::rules::{CustomOutcome, FormValues};

/// Loose email shape: something, `@`, something, `.`, something.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Optional leading `+`, then 10-15 digits.
pub const PHONE_PATTERN: &str = r"^\+?[0-9]{10,15}$";

/// Airtime transfer PIN: exactly four digits.
pub const CARD_PIN_PATTERN: &str = r"^[0-9]{4}$";

/// Minimum length enforced by [`strong_password`].
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));

static CARD_PIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CARD_PIN_PATTERN).expect("valid regex"));

pub fn email_regex() -> &'static Regex {
    &EMAIL_RE
}

pub fn phone_regex() -> &'static Regex {
    &PHONE_RE
}

pub fn card_pin_regex() -> &'static Regex {
    &CARD_PIN_RE
}

/// RFC-style email check (stricter than [`EMAIL_PATTERN`]).
pub fn is_email(value: &str) -> bool {
    value.validate_email()
}

/// Custom check: at least [`MIN_PASSWORD_LENGTH`] characters with a
/// lowercase letter, an uppercase letter, a digit and a symbol.
///
/// Written as a predicate because the `regex` crate has no lookahead.
pub fn strong_password(value: &str, _all: &FormValues) -> CustomOutcome {
    let long_enough = value.chars().count() >= MIN_PASSWORD_LENGTH;
    let lower = value.chars().any(char::is_lowercase);
    let upper = value.chars().any(char::is_uppercase);
    let digit = value.chars().any(|c| c.is_ascii_digit());
    let symbol = value.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    if long_enough && lower && upper && digit && symbol {
        CustomOutcome::Pass
    } else {
        CustomOutcome::fail_with(
            "Password must contain upper and lowercase letters, a number and a symbol",
        )
    }
}

/// Custom check factory: the field must equal the value of `other`.
///
/// ```
/// use cards2cash_core::validation::{patterns::matches_field, FieldRule};
/// let rule = FieldRule::new().custom(matches_field("password", "Passwords do not match"));
/// # let _ = rule;
/// ```
pub fn matches_field(
    other: &'static str,
    message: &'static str,
) -> impl Fn(&str, &FormValues) -> CustomOutcome + Send + Sync + 'static {
    move |value, all| {
        let expected = all.get(other).map(String::as_str).unwrap_or_default();
        if value == expected {
            CustomOutcome::Pass
        } else {
            CustomOutcome::fail_with(message)
        }
    }
}
