use cards2cash_core::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("{action} is already in progress")]
    InFlight { action: &'static str },

    #[error("{action} failed: {reason}")]
    Rejected { action: &'static str, reason: String },

    #[error("Validation failed for {} field(s)", .0.len())]
    Invalid(FieldErrors),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}
