//! Rule sets for the settings screens.

use cards2cash_core::validation::patterns::{is_email, matches_field, phone_regex, strong_password};
use cards2cash_core::validation::{FieldRule, FormValues, RuleSet};

/// Profile screen: display name, email and optional phone number.
pub fn profile_rules() -> RuleSet {
    RuleSet::new()
        .field("fullName", FieldRule::new().required().min_length(2).max_length(60))
        .field(
            "email",
            FieldRule::new()
                .required()
                .custom(|value: &str, _: &FormValues| is_email(value.trim()))
                .message("Enter a valid email address"),
        )
        .field(
            "phone",
            FieldRule::new()
                .pattern(phone_regex().clone())
                .message("Enter a valid phone number"),
        )
}

/// Security screen: change password.
pub fn password_change_rules() -> RuleSet {
    RuleSet::new()
        .field("currentPassword", FieldRule::new().required())
        .field(
            "newPassword",
            FieldRule::new()
                .required()
                .min_length(8)
                .custom(strong_password),
        )
        .field(
            "confirmPassword",
            FieldRule::new()
                .required()
                .custom(matches_field("newPassword", "Passwords do not match")),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cards2cash_core::validation::validate_form;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn profile_phone_is_optional() {
        let errors = validate_form(
            &values(&[("fullName", "Ada Obi"), ("email", "ada@example.com")]),
            &profile_rules(),
        );
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn profile_rejects_bad_email() {
        let errors = validate_form(
            &values(&[("fullName", "Ada Obi"), ("email", "ada@")]),
            &profile_rules(),
        );
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Enter a valid email address")
        );
    }

    #[test]
    fn password_change_reports_weak_and_mismatched() {
        let errors = validate_form(
            &values(&[
                ("currentPassword", "old"),
                ("newPassword", "weakpassword"),
                ("confirmPassword", "weakpassword"),
            ]),
            &password_change_rules(),
        );
        assert!(errors.contains_key("newPassword"));
        assert!(!errors.contains_key("confirmPassword"));

        let errors = validate_form(
            &values(&[
                ("currentPassword", "old"),
                ("newPassword", "Abcdef1!"),
                ("confirmPassword", "Abcdef1?"),
            ]),
            &password_change_rules(),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("confirmPassword").map(String::as_str),
            Some("Passwords do not match")
        );
    }
}
