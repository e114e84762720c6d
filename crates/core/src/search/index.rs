//! Linear substring search over the catalog.
//!
//! Matching is a case-insensitive substring test against the title or the
//! description. There is no relevance scoring: results keep catalog order.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::catalog::{default_catalog, SearchEntry};
use crate::types::{Category, CategoryFilter};

/// Searchable catalog. Entries are fixed for the lifetime of the index.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
    /// Case-folded `(title, description)` per entry, same order as `entries`.
    folded: Vec<(String, String)>,
}

impl SearchIndex {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        let folded = entries
            .iter()
            .map(|e| (fold_case(&e.title), fold_case(&e.description)))
            .collect();
        Self { entries, folded }
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return every entry whose title or description contains `query`
    /// (case-insensitive), restricted to `filter`, in catalog order.
    ///
    /// An empty query returns nothing. The query is not trimmed, so
    /// `"card "` only matches text containing that trailing space.
    pub fn search(&self, query: &str, filter: CategoryFilter) -> Vec<&SearchEntry> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = fold_case(query);

        self.entries
            .iter()
            .zip(&self.folded)
            .filter(|(entry, _)| filter.admits(entry.category))
            .filter(|(_, (title, description))| {
                title.contains(&needle) || description.contains(&needle)
            })
            .map(|(entry, _)| entry)
            .collect()
    }

    /// Tally results per category for the category tabs.
    pub fn category_counts(results: &[&SearchEntry]) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for entry in results {
            *counts.by_category.entry(entry.category).or_default() += 1;
            counts.all += 1;
        }
        counts
    }
}

/// Case folding shared by search and highlighting: per-character Unicode
/// lowercase, so both agree on what a match is.
pub(crate) fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new(default_catalog().to_vec())
    }
}

// ---------------------------------------------------------------------------
// CategoryCounts
// ---------------------------------------------------------------------------

/// Per-category result counts plus the synthetic `all` total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    all: usize,
    by_category: BTreeMap<Category, usize>,
}

impl CategoryCounts {
    pub fn all(&self) -> usize {
        self.all
    }

    /// Count for `category`; zero when no result belongs to it.
    pub fn get(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    /// Non-zero categories in enum order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.by_category.iter().map(|(c, n)| (*c, *n))
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.by_category.len() + 1))?;
        map.serialize_entry("all", &self.all)?;
        for (category, count) in &self.by_category {
            map.serialize_entry(category.as_str(), count)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
