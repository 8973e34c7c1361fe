//! `SQLite` storage backend using sqlx.
//!
//! Split into modular files by domain concern.

mod leads;
mod sites;

use std::path::Path;
use std::time::Duration;

use leadengine_core::{
    DB_POOL_ACQUIRE_TIMEOUT_SECS, DB_POOL_IDLE_TIMEOUT_SECS, Lead, SQLITE_BUSY_TIMEOUT_SECS, Site,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::error::StorageError;
use crate::migrations::run_sqlite_migrations;

pub(crate) const SITE_COLUMNS: &str = "id, slug, niche, city, partner_email";
pub(crate) const LEAD_COLUMNS: &str =
    "id, site_id, name, phone, email, service, message, created_at, routed";

/// Main storage struct wrapping a `SQLite` connection pool.
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pub(crate) pool: SqlitePool,
}

impl SqliteStorage {
    /// Open (creating if missing) the database file at `db_path` and run
    /// migrations.
    pub async fn new(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(SQLITE_BUSY_TIMEOUT_SECS))
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size.max(1))
            .acquire_timeout(Duration::from_secs(DB_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(DB_POOL_IDLE_TIMEOUT_SECS))
            .connect_with(options)
            .await?;
        run_sqlite_migrations(&pool).await?;
        tracing::info!(path = %db_path.display(), pool_size, "SqliteStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) fn row_to_site(row: &SqliteRow) -> Result<Site, StorageError> {
    Ok(Site {
        id: row.try_get("id")?,
        slug: row.try_get("slug")?,
        niche: row.try_get("niche")?,
        city: row.try_get("city")?,
        partner_email: row.try_get("partner_email")?,
    })
}

pub(crate) fn row_to_lead(row: &SqliteRow) -> Result<Lead, StorageError> {
    Ok(Lead {
        id: row.try_get("id")?,
        site_id: row.try_get("site_id")?,
        name: row.try_get("name")?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        service: row.try_get("service")?,
        message: row.try_get("message")?,
        created_at: row.try_get("created_at")?,
        routed: row.try_get("routed")?,
    })
}
