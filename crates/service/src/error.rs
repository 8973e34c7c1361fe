//! Typed error enum for the service layer.
//!
//! Unifies validation, storage and delivery failures so callers (HTTP
//! handlers, CLI commands) can map each mode to a response.

use leadengine_core::InputError;
use leadengine_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage, validation and delivery failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (blank name or phone).
    #[error("{0}")]
    InvalidInput(String),

    /// The intake transaction kept conflicting with concurrent writers.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A notification or sitemap submission could not be delivered.
    #[error("delivery: {0}")]
    Delivery(String),

    /// A configured value cannot be used (e.g. an out-of-range window).
    #[error("config: {0}")]
    Config(String),

    /// Reading generated site artifacts failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    /// Whether this error represents a duplicate/conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_)) || matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}

impl From<InputError> for ServiceError {
    fn from(err: InputError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Delivery(err.to_string())
    }
}
