//! End-to-end checks of the search index, history and highlighter through
//! the public API.

use cards2cash_core::search::{highlight, RecentQueries, SearchEntry, SearchIndex, Span};
use cards2cash_core::types::{Category, CategoryFilter};

fn index() -> SearchIndex {
    SearchIndex::new(vec![
        SearchEntry::new("c1", "Generate Card", "", Category::Cards, "/generate-card"),
        SearchEntry::new("c2", "Convert Credit", "", Category::Convert, "/convert"),
    ])
}

fn ids<'a>(results: &[&'a SearchEntry]) -> Vec<&'a str> {
    results.iter().map(|e| e.id.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Test: two-entry catalog scenario
// ---------------------------------------------------------------------------

#[test]
fn two_entry_catalog_scenario() {
    let index = index();

    assert_eq!(ids(&index.search("card", CategoryFilter::All)), ["c1"]);
    assert_eq!(ids(&index.search("c", CategoryFilter::All)), ["c1", "c2"]);
    assert!(index
        .search("card", "convert".parse().expect("valid filter"))
        .is_empty());
}

// ---------------------------------------------------------------------------
// Test: every result matches, every match is returned exactly once
// ---------------------------------------------------------------------------

#[test]
fn results_are_exactly_the_matching_entries() {
    let index = SearchIndex::default();

    for query in ["a", "card", "RATES", "fund", "zzz", "&", "e c"] {
        let needle = query.to_lowercase();
        let results = index.search(query, CategoryFilter::All);

        let expected: Vec<&str> = index
            .entries()
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&needle)
                    || e.description.to_lowercase().contains(&needle)
            })
            .map(|e| e.id.as_str())
            .collect();

        assert_eq!(ids(&results), expected, "query {query:?}");
    }
}

// ---------------------------------------------------------------------------
// Test: category counts stay consistent with results
// ---------------------------------------------------------------------------

#[test]
fn category_counts_add_up_for_every_filter() {
    let index = SearchIndex::default();

    for filter in std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    {
        let results = index.search("e", filter);
        let counts = SearchIndex::category_counts(&results);
        assert_eq!(counts.all(), results.len());
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), results.len());
    }
}

// ---------------------------------------------------------------------------
// Test: recording the same query twice keeps one copy at the front
// ---------------------------------------------------------------------------

#[test]
fn repeated_record_keeps_single_front_entry() {
    let mut recent = RecentQueries::default();
    recent.record("crypto");
    recent.record("card");
    recent.record("card");

    assert_eq!(recent.as_slice(), ["card", "crypto"]);
    assert_eq!(recent.as_slice().iter().filter(|q| *q == "card").count(), 1);
}

// ---------------------------------------------------------------------------
// Test: highlighting a metacharacter query against itself
// ---------------------------------------------------------------------------

#[test]
fn highlight_treats_query_literally() {
    let spans = highlight("a.b*c", "a.b*c");
    assert_eq!(
        spans,
        vec![Span {
            text: "a.b*c".to_string(),
            matched: true
        }]
    );
}
