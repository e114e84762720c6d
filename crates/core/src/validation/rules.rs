//! Validation rule and result types.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::CoreError;

/// Field name -> current value.
pub type FormValues = BTreeMap<String, String>;

/// Field name -> error message. A field absent from the map is valid.
pub type FieldErrors = BTreeMap<String, String>;

/// Result of a custom check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomOutcome {
    Pass,
    /// Failed, optionally with a message that overrides the rule's own.
    Fail(Option<String>),
}

impl CustomOutcome {
    pub fn fail_with(message: impl Into<String>) -> Self {
        CustomOutcome::Fail(Some(message.into()))
    }

    /// Build an outcome from a `{ valid, message }` pair.
    pub fn from_parts(valid: bool, message: Option<String>) -> Self {
        if valid {
            CustomOutcome::Pass
        } else {
            CustomOutcome::Fail(message)
        }
    }
}

impl From<bool> for CustomOutcome {
    fn from(valid: bool) -> Self {
        CustomOutcome::from_parts(valid, None)
    }
}

/// Custom predicate: receives the field value and every form value.
pub type CustomCheck = Arc<dyn Fn(&str, &FormValues) -> CustomOutcome + Send + Sync>;

/// Rules for one field. A default rule has no checks and always passes.
#[derive(Clone, Default)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub custom: Option<CustomCheck>,
    /// Overrides the generic message for every failure of this rule.
    pub message: Option<String>,
}

impl FieldRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Anchoring is the caller's job: `pattern` is tested with
    /// [`Regex::is_match`].
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compile and attach `pattern`.
    pub fn pattern_str(self, pattern: &str) -> Result<Self, CoreError> {
        let re = Regex::new(pattern).map_err(|e| CoreError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.pattern(re))
    }

    pub fn custom<F, R>(mut self, check: F) -> Self
    where
        F: Fn(&str, &FormValues) -> R + Send + Sync + 'static,
        R: Into<CustomOutcome>,
    {
        self.custom = Some(Arc::new(move |value, all| check(value, all).into()));
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("custom", &self.custom.is_some())
            .field("message", &self.message)
            .finish()
    }
}

/// Rules for a whole form, keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, FieldRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the rule for `name`.
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.rules.insert(name.into(), rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.rules.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
