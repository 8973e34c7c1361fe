//! Storage layer for the lead engine
//!
//! Sites and leads live in two relations linked by `leads.site_id`.
//! `SQLite` serves local runs and tests; `PostgreSQL` serves production.
//! Both are reached through [`StorageBackend`].

mod backend;
pub mod error;
mod migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
#[cfg(feature = "sqlite")]
mod sqlite_storage;
#[cfg(test)]
mod tests;
pub mod traits;
mod types;

pub use backend::StorageBackend;
pub use error::StorageError;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
#[cfg(feature = "sqlite")]
pub use sqlite_storage::SqliteStorage;
pub use traits::{LeadStore, SiteStore};
pub use types::RecordedLead;
