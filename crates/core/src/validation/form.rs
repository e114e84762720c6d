//! Per-form value, error and touched bookkeeping.
//!
//! Errors are always recomputed from values and rules. `touched` only gates
//! whether an error is shown; it never changes what the error is.

use std::collections::BTreeSet;

use super::evaluator::{is_valid, validate_field, validate_form};
use super::rules::{FieldErrors, FormValues, RuleSet};

#[derive(Debug, Clone)]
pub struct FormState {
    rules: RuleSet,
    values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<String>,
}

impl FormState {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            values: FormValues::new(),
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
        }
    }

    /// Start from pre-filled values (e.g. a saved profile).
    pub fn with_values(rules: RuleSet, values: FormValues) -> Self {
        Self {
            values,
            ..Self::new(rules)
        }
    }

    /// Record an edit. Errors are left as they are until the field is
    /// blurred or the form is submitted.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    /// Mark `field` touched and revalidate only that field.
    pub fn blur(&mut self, field: &str) {
        self.touched.insert(field.to_string());
        self.revalidate(field);
    }

    /// Validate every ruled field, mark all of them touched, and return
    /// whether the form is valid.
    pub fn submit(&mut self) -> bool {
        self.errors = validate_form(&self.values, &self.rules);
        for (name, _) in self.rules.iter() {
            self.touched.insert(name.to_string());
        }
        is_valid(&self.errors)
    }

    /// The error for `field`, only once it has been touched.
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or_default()
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Whether the current error map is empty. This reflects only fields
    /// validated so far; call [`submit`](Self::submit) for a full check.
    pub fn is_valid(&self) -> bool {
        is_valid(&self.errors)
    }

    /// Clear values, errors and touched state. Rules are kept.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.touched.clear();
    }

    fn revalidate(&mut self, field: &str) {
        let Some(rule) = self.rules.get(field) else {
            return;
        };
        match validate_field(field, self.value(field), rule, &self.values) {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.remove(field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::patterns::matches_field;
    use crate::validation::FieldRule;

    fn signup_rules() -> RuleSet {
        RuleSet::new()
            .field("name", FieldRule::new().required())
            .field("password", FieldRule::new().required().min_length(8))
            .field(
                "confirmPassword",
                FieldRule::new().custom(matches_field("password", "Passwords do not match")),
            )
    }

    #[test]
    fn set_value_does_not_validate() {
        let mut form = FormState::new(signup_rules());
        form.set_value("name", "");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn blur_validates_only_that_field() {
        let mut form = FormState::new(signup_rules());
        form.blur("name");
        assert_eq!(form.error("name"), Some("Name is required"));
        assert_eq!(form.error("password"), None);
        assert!(!form.is_touched("password"));
    }

    #[test]
    fn blur_clears_error_once_fixed() {
        let mut form = FormState::new(signup_rules());
        form.blur("name");
        form.set_value("name", "Ada");
        form.blur("name");
        assert_eq!(form.error("name"), None);
    }

    #[test]
    fn blur_leaves_other_errors_alone() {
        let mut form = FormState::new(signup_rules());
        form.submit();
        assert!(form.error("password").is_some());

        form.set_value("name", "Ada");
        form.blur("name");
        assert_eq!(form.error("name"), None);
        assert!(form.error("password").is_some(), "untouched error must persist");
    }

    #[test]
    fn blur_on_field_without_rule_marks_touched_only() {
        let mut form = FormState::new(signup_rules());
        form.blur("nickname");
        assert!(form.is_touched("nickname"));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn submit_marks_all_touched() {
        let mut form = FormState::new(signup_rules());
        assert!(!form.submit());
        for field in ["name", "password", "confirmPassword"] {
            assert!(form.is_touched(field), "{field} should be touched");
        }
        assert_eq!(form.visible_error("name"), Some("Name is required"));
    }

    #[test]
    fn visible_error_hidden_until_touched() {
        let mut form = FormState::new(signup_rules());
        form.set_value("password", "short");
        form.blur("password");
        form.set_value("name", "");
        // name has not been validated or touched
        assert_eq!(form.visible_error("name"), None);
        assert!(form.visible_error("password").is_some());
    }

    #[test]
    fn submit_valid_form() {
        let mut values = FormValues::new();
        values.insert("name".into(), "Ada".into());
        values.insert("password".into(), "longenough".into());
        values.insert("confirmPassword".into(), "longenough".into());
        let mut form = FormState::with_values(signup_rules(), values);
        assert!(form.submit());
        assert!(form.is_valid());
    }

    #[test]
    fn errors_match_full_validation_after_submit() {
        let mut form = FormState::new(signup_rules());
        form.set_value("password", "longenough");
        form.set_value("confirmPassword", "different");
        form.submit();
        assert_eq!(form.errors(), &validate_form(form.values(), form.rules()));
    }

    #[test]
    fn reset_clears_everything_but_rules() {
        let mut form = FormState::new(signup_rules());
        form.set_value("name", "Ada");
        form.submit();
        form.reset();
        assert!(form.values().is_empty());
        assert!(form.errors().is_empty());
        assert!(!form.is_touched("name"));
        assert_eq!(form.rules().len(), 3);
    }
}
