//! Bounded, de-duplicated, most-recent-first query history.

use serde::Serialize;

/// Default number of recent searches kept.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Upper bound on the configurable history length.
pub const MAX_RECENT_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentQueries {
    items: Vec<String>,
    #[serde(skip)]
    capacity: usize,
}

impl RecentQueries {
    /// Create an empty history. `capacity` is clamped to
    /// `1..=MAX_RECENT_LIMIT`.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_RECENT_LIMIT);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild a history from persisted items (most recent first).
    ///
    /// Items are re-recorded oldest first, so blanks are dropped, duplicates
    /// collapse onto their most recent position, and the cap is applied.
    pub fn from_vec(items: Vec<String>, capacity: usize) -> Self {
        let mut recent = Self::new(capacity);
        for item in items.iter().rev() {
            recent.record(item);
        }
        recent
    }

    /// Move `query` (trimmed) to the front. Blank queries are ignored.
    ///
    /// Returns `true` when the history changed.
    pub fn record(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        if self.items.first().map(String::as_str) == Some(query) {
            return false;
        }

        self.items.retain(|q| q != query);
        self.items.insert(0, query.to_string());
        self.items.truncate(self.capacity);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecentQueries {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_LIMIT)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
