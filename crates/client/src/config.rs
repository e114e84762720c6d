use std::time::Duration;

use cards2cash_core::search::{DEFAULT_RECENT_LIMIT, MAX_RECENT_LIMIT};

use crate::error::ConfigError;

/// Client configuration loaded from environment variables.
///
/// All fields have defaults matching the shipped web client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Maximum number of recent searches kept (default: `5`).
    pub recent_search_limit: usize,
    /// Mirror recent searches to the key-value store (default: `true`).
    pub persist_recent_searches: bool,
    /// Fixed delay of every simulated network call (default: `1500ms`).
    pub simulated_latency: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            recent_search_limit: DEFAULT_RECENT_LIMIT,
            persist_recent_searches: true,
            simulated_latency: Duration::from_millis(1_500),
        }
    }
}

impl ClientConfig {
    /// Load `.env` (if present) and then read the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Read configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `RECENT_SEARCH_LIMIT`     | `5`     |
    /// | `PERSIST_RECENT_SEARCHES` | `true`  |
    /// | `SIMULATED_LATENCY_MS`    | `1500`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let recent_search_limit = match lookup("RECENT_SEARCH_LIMIT") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if (1..=MAX_RECENT_LIMIT).contains(&n) => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "RECENT_SEARCH_LIMIT",
                        expected: "an integer between 1 and 20",
                        value: raw,
                    })
                }
            },
            None => defaults.recent_search_limit,
        };

        let persist_recent_searches = match lookup("PERSIST_RECENT_SEARCHES") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                key: "PERSIST_RECENT_SEARCHES",
                expected: "a boolean",
                value: raw.clone(),
            })?,
            None => defaults.persist_recent_searches,
        };

        let simulated_latency = match lookup("SIMULATED_LATENCY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::Invalid {
                    key: "SIMULATED_LATENCY_MS",
                    expected: "a non-negative integer",
                    value: raw.clone(),
                })?,
            None => defaults.simulated_latency,
        };

        let config = Self {
            recent_search_limit,
            persist_recent_searches,
            simulated_latency,
        };
        tracing::debug!(?config, "Loaded client configuration");
        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
