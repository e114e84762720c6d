#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}
