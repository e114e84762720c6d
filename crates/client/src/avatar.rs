//! Avatar context: the user's avatar image URL and fallback initials.
//!
//! Persisted to the key-value store so the avatar survives reloads.
//! Components subscribe to be told about changes instead of polling.

use std::sync::{Arc, Mutex, PoisonError};

use cards2cash_events::{Listeners, Subscription};
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const AVATAR_URL_KEY: &str = "avatar_url";
pub const AVATAR_INITIALS_KEY: &str = "avatar_initials";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub url: Option<String>,
    pub initials: Option<String>,
}

pub struct AvatarContext {
    store: Arc<dyn KeyValueStore>,
    current: Mutex<Avatar>,
    listeners: Listeners<Avatar>,
}

impl AvatarContext {
    /// Restore the avatar from `store`.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let avatar = Avatar {
            url: store.get(AVATAR_URL_KEY),
            initials: store.get(AVATAR_INITIALS_KEY),
        };
        Self {
            store,
            current: Mutex::new(avatar),
            listeners: Listeners::new(),
        }
    }

    pub fn current(&self) -> Avatar {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Set the image URL. A blank URL removes it.
    pub fn set_url(&self, url: &str) {
        let url = url.trim();
        let value = (!url.is_empty()).then(|| url.to_string());
        self.update(AVATAR_URL_KEY, value, |avatar, v| avatar.url = v);
    }

    /// Set the fallback initials. A blank value removes them.
    pub fn set_initials(&self, initials: &str) {
        let initials = initials.trim().to_uppercase();
        let value = (!initials.is_empty()).then_some(initials);
        self.update(AVATAR_INITIALS_KEY, value, |avatar, v| avatar.initials = v);
    }

    /// Remove both the URL and the initials.
    pub fn clear(&self) {
        for key in [AVATAR_URL_KEY, AVATAR_INITIALS_KEY] {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(error = %e, key, "Failed to remove avatar entry");
            }
        }
        let snapshot = {
            let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
            *current = Avatar::default();
            current.clone()
        };
        self.listeners.notify(&snapshot);
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Avatar) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    fn update(&self, key: &str, value: Option<String>, apply: impl FnOnce(&mut Avatar, Option<String>)) {
        let persisted = match &value {
            Some(v) => self.store.set(key, v),
            None => self.store.remove(key),
        };
        if let Err(e) = persisted {
            tracing::warn!(error = %e, key, "Failed to persist avatar entry");
        }

        let snapshot = {
            let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
            apply(&mut *current, value);
            current.clone()
        };
        tracing::debug!(key, "Avatar updated");
        self.listeners.notify(&snapshot);
    }
}

/// First letters of the first two words of `name`, uppercased.
///
/// `"ada lovelace"` -> `"AL"`, `"Cher"` -> `"C"`, `"  "` -> `""`.
pub fn initials_from_name(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
