//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, duplicate, busy)
//! instead of inspecting driver errors.

use thiserror::Error;

/// `SQLite` extended codes for busy/locked databases and Postgres
/// SQLSTATEs for serialization failure and deadlock.
const RETRYABLE_CODES: [&str; 6] = ["5", "6", "517", "261", "40001", "40P01"];

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    /// Unique constraint violation (concurrent site creation).
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// Lock contention or serialization failure; the transaction can be rerun.
    #[error("conflict: {0}")]
    Conflict(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Schema creation failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// The database URL names a backend this build does not include.
    #[error("unsupported database url: {0}")]
    UnsupportedUrl(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }

    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    /// Whether rerunning the whole transaction may succeed.
    pub fn is_retryable(&self) -> bool {
        self.is_duplicate() || matches!(self, Self::Conflict(_)) || self.is_transient()
    }
}

/// Custom `From<sqlx::Error>`, not a blanket `#[from]`.
///
/// - `RowNotFound` → `NotFound` (generic; callers remap with entity context)
/// - unique violation → `Duplicate`
/// - busy / locked / serialization failure → `Conflict`
/// - everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", key: "unknown".into() },
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Duplicate(db_err.message().to_owned())
            },
            sqlx::Error::Database(db_err)
                if db_err.code().is_some_and(|c| RETRYABLE_CODES.iter().any(|code| c == *code)) =>
            {
                Self::Conflict(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}
