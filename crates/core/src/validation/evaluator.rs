//! Rule evaluator. Pure logic, no I/O.

use std::panic::{self, AssertUnwindSafe};

use super::rules::{CustomOutcome, FieldErrors, FieldRule, FormValues, RuleSet};

/// Validate one field against its rule.
///
/// Checks run in a fixed order and stop at the first failure, so at most
/// one message is reported:
///
/// 1. required (whitespace-only counts as empty)
/// 2. empty and optional -> valid, nothing else runs. Only `""` is empty
///    here: whitespace in an optional field still goes through the checks.
/// 3. minimum length
/// 4. maximum length
/// 5. pattern
/// 6. custom check
///
/// Lengths count Unicode scalar values. A custom check that panics is
/// reported as a failure with the generic message.
pub fn validate_field(
    name: &str,
    value: &str,
    rule: &FieldRule,
    all_values: &FormValues,
) -> Option<String> {
    let label = field_label(name);

    if rule.required && value.trim().is_empty() {
        return Some(message_or(rule, || format!("{label} is required")));
    }
    if value.is_empty() {
        return None;
    }

    let length = value.chars().count();

    if let Some(min) = rule.min_length {
        if length < min {
            return Some(message_or(rule, || {
                format!("{label} must be at least {min} characters")
            }));
        }
    }

    if let Some(max) = rule.max_length {
        if length > max {
            return Some(message_or(rule, || {
                format!("{label} must be at most {max} characters")
            }));
        }
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(value) {
            return Some(message_or(rule, || format!("{label} is invalid")));
        }
    }

    if let Some(check) = &rule.custom {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| check(value, all_values)))
            .unwrap_or_else(|_| {
                tracing::warn!(field = name, "Custom validator panicked, treating field as invalid");
                CustomOutcome::Fail(None)
            });

        if let CustomOutcome::Fail(custom_message) = outcome {
            return Some(
                custom_message
                    .or_else(|| rule.message.clone())
                    .unwrap_or_else(|| format!("{label} is invalid")),
            );
        }
    }

    None
}

/// Validate every field that has a rule. Missing values validate as `""`.
///
/// Fields without a rule never appear in the result.
pub fn validate_form(values: &FormValues, rules: &RuleSet) -> FieldErrors {
    rules
        .iter()
        .filter_map(|(name, rule)| {
            let value = values.get(name).map(String::as_str).unwrap_or_default();
            validate_field(name, value, rule, values).map(|msg| (name.to_string(), msg))
        })
        .collect()
}

/// `true` iff there are no errors.
pub fn is_valid(errors: &FieldErrors) -> bool {
    errors.is_empty()
}

fn message_or(rule: &FieldRule, default: impl FnOnce() -> String) -> String {
    rule.message.clone().unwrap_or_else(default)
}

/// Human-readable label for a field name.
///
/// `confirmPassword`, `confirm_password` and `confirm-password` all become
/// `Confirm password`.
pub fn field_label(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in name.chars() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.extend(c.to_lowercase());
        } else {
            current.extend(c.to_lowercase());
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
