//! Global feature search.
//!
//! A fixed catalog of navigable pages, a linear substring index over it,
//! the bounded recent-query history, and literal-safe match highlighting.

pub mod catalog;
pub mod highlight;
pub mod index;
pub mod recent;

pub use catalog::{default_catalog, SearchEntry};
pub use highlight::{escape_pattern, highlight, Span};
pub use index::{CategoryCounts, SearchIndex};
pub use recent::{RecentQueries, DEFAULT_RECENT_LIMIT, MAX_RECENT_LIMIT};
