//! Form validation engine.
//!
//! Declarative per-field rules, a pure evaluator, reusable patterns, and the
//! touched/error bookkeeping for a single form. No I/O.

pub mod evaluator;
pub mod form;
pub mod patterns;
pub mod rules;

pub use evaluator::{is_valid, validate_field, validate_form};
pub use form::FormState;
pub use rules::{CustomOutcome, FieldErrors, FieldRule, FormValues, RuleSet};
