//! Search context: the global search box state shared by the header search
//! field and the results page.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cards2cash_core::search::{CategoryCounts, RecentQueries, SearchEntry, SearchIndex};
use cards2cash_core::types::CategoryFilter;
use cards2cash_events::{Listeners, Subscription};

use crate::config::ClientConfig;
use crate::storage::{get_json, set_json, KeyValueStore};

pub const RECENT_SEARCHES_KEY: &str = "recent_searches";

/// Observable search state handed to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub query: String,
    pub filter: CategoryFilter,
    pub recent: Vec<String>,
}

#[derive(Debug)]
struct SearchState {
    query: String,
    filter: CategoryFilter,
    recent: RecentQueries,
}

pub struct SearchContext {
    index: Arc<SearchIndex>,
    store: Arc<dyn KeyValueStore>,
    persist: bool,
    state: Mutex<SearchState>,
    listeners: Listeners<SearchSnapshot>,
}

impl SearchContext {
    /// Create the context, restoring recent searches from `store` when
    /// persistence is enabled. Corrupt stored history is discarded.
    pub fn new(index: Arc<SearchIndex>, store: Arc<dyn KeyValueStore>, config: &ClientConfig) -> Self {
        let capacity = config.recent_search_limit;
        let recent = if config.persist_recent_searches {
            match get_json::<Vec<String>>(store.as_ref(), RECENT_SEARCHES_KEY) {
                Ok(Some(items)) => RecentQueries::from_vec(items, capacity),
                Ok(None) => RecentQueries::new(capacity),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable recent searches");
                    RecentQueries::new(capacity)
                }
            }
        } else {
            RecentQueries::new(capacity)
        };

        Self {
            index,
            store,
            persist: config.persist_recent_searches,
            state: Mutex::new(SearchState {
                query: String::new(),
                filter: CategoryFilter::All,
                recent,
            }),
            listeners: Listeners::new(),
        }
    }

    /// Update the live query (every keystroke). History is untouched.
    pub fn set_query(&self, query: &str) {
        self.mutate(|state| {
            if state.query == query {
                return false;
            }
            state.query = query.to_string();
            true
        });
    }

    /// Switch category tab. History is untouched.
    pub fn set_filter(&self, filter: CategoryFilter) {
        self.mutate(|state| {
            if state.filter == filter {
                return false;
            }
            state.filter = filter;
            true
        });
    }

    /// Empty the live query. History is untouched.
    pub fn clear_query(&self) {
        self.set_query("");
    }

    /// Submit the current query: it becomes the most recent search.
    pub fn submit(&self) {
        self.mutate(|state| {
            let query = state.query.clone();
            if !state.recent.record(&query) {
                return false;
            }
            tracing::debug!(entries = state.recent.len(), "Recorded search query");
            // Written under the state lock so concurrent submits store in order.
            self.persist(state.recent.as_slice());
            true
        });
    }

    pub fn clear_recent(&self) {
        self.mutate(|state| {
            if state.recent.is_empty() {
                return false;
            }
            state.recent.clear();
            self.persist(&[]);
            true
        });
    }

    /// Entries matching the current query and filter, in catalog order.
    pub fn results(&self) -> Vec<SearchEntry> {
        let (query, filter) = {
            let state = self.lock();
            (state.query.clone(), state.filter)
        };
        self.index
            .search(&query, filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Per-category counts for the current query across every category,
    /// so tabs show totals regardless of the selected filter.
    pub fn counts(&self) -> CategoryCounts {
        let query = self.lock().query.clone();
        let results = self.index.search(&query, CategoryFilter::All);
        SearchIndex::category_counts(&results)
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        Self::snapshot_of(&self.lock())
    }

    pub fn recent_queries(&self) -> Vec<String> {
        self.lock().recent.as_slice().to_vec()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SearchSnapshot) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    fn lock(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn snapshot_of(state: &SearchState) -> SearchSnapshot {
        SearchSnapshot {
            query: state.query.clone(),
            filter: state.filter,
            recent: state.recent.as_slice().to_vec(),
        }
    }

    /// Apply `change`; notify listeners only when it reports a change.
    fn mutate(&self, change: impl FnOnce(&mut SearchState) -> bool) {
        let snapshot = {
            let mut state = self.lock();
            if !change(&mut *state) {
                return;
            }
            Self::snapshot_of(&state)
        };
        self.listeners.notify(&snapshot);
    }

    fn persist(&self, history: &[String]) {
        if !self.persist {
            return;
        }
        let result = if history.is_empty() {
            self.store.remove(RECENT_SEARCHES_KEY)
        } else {
            set_json(self.store.as_ref(), RECENT_SEARCHES_KEY, history)
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist recent searches");
        }
    }
}
