//! Cards2Cash client core.
//!
//! Pure logic with no I/O: the feature search catalog and index, the
//! recent-query buffer, match highlighting, and the form validation engine.
//! Stateful wrappers (persistence, notifications, simulated network calls)
//! live in `cards2cash-client`.

pub mod error;
pub mod search;
pub mod types;
pub mod validation;

pub use error::CoreError;
