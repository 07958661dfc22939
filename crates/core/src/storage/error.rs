use thiserror::Error;

/// Error reported by the backing store.
///
/// Every store failure collapses into this single kind carrying a diagnostic
/// message; callers decide how much of it reaches the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Store error: {message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The diagnostic message, intended for server-side logs.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
