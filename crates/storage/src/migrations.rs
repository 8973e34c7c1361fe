//! Schema creation for both backends.
//!
//! Every statement is idempotent (`IF NOT EXISTS`), so migrations run on
//! each startup.

#[cfg(feature = "postgres")]
use sqlx::PgPool;
#[cfg(feature = "sqlite")]
use sqlx::SqlitePool;

use crate::error::StorageError;

#[cfg(feature = "sqlite")]
const SQLITE_SCHEMA: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS sites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        slug TEXT NOT NULL UNIQUE,
        niche TEXT NOT NULL,
        city TEXT NOT NULL,
        partner_email TEXT
    )",
    "CREATE TABLE IF NOT EXISTS leads (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        site_id INTEGER NOT NULL REFERENCES sites (id),
        name TEXT NOT NULL,
        phone TEXT NOT NULL,
        email TEXT,
        service TEXT,
        message TEXT,
        created_at TEXT NOT NULL,
        routed INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE INDEX IF NOT EXISTS idx_leads_site_created ON leads (site_id, created_at)",
    "CREATE INDEX IF NOT EXISTS idx_sites_partner ON sites (partner_email)",
];

#[cfg(feature = "postgres")]
const PG_SCHEMA: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS sites (
        id BIGSERIAL PRIMARY KEY,
        slug TEXT NOT NULL UNIQUE,
        niche TEXT NOT NULL,
        city TEXT NOT NULL,
        partner_email TEXT
    )",
    "CREATE TABLE IF NOT EXISTS leads (
        id BIGSERIAL PRIMARY KEY,
        site_id BIGINT NOT NULL REFERENCES sites (id),
        name TEXT NOT NULL,
        phone TEXT NOT NULL,
        email TEXT,
        service TEXT,
        message TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        routed BOOLEAN NOT NULL DEFAULT FALSE
    )",
    "CREATE INDEX IF NOT EXISTS idx_leads_site_created ON leads (site_id, created_at)",
    "CREATE INDEX IF NOT EXISTS idx_sites_partner ON sites (partner_email)",
];

#[cfg(feature = "sqlite")]
pub(crate) async fn run_sqlite_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    for statement in SQLITE_SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }
    Ok(())
}

#[cfg(feature = "postgres")]
pub(crate) async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    for statement in PG_SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }
    Ok(())
}
