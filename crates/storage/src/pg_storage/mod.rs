//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

mod leads;
mod sites;

use std::time::Duration;

use leadengine_core::{DB_POOL_ACQUIRE_TIMEOUT_SECS, DB_POOL_IDLE_TIMEOUT_SECS, Lead, Site};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::migrations::run_pg_migrations;

pub(crate) const SITE_COLUMNS: &str = "id, slug, niche, city, partner_email";
pub(crate) const LEAD_COLUMNS: &str =
    "id, site_id, name, phone, email, service, message, created_at, routed";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pub(crate) pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str, pool_size: u32) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(pool_size.max(1))
            .acquire_timeout(Duration::from_secs(DB_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(DB_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await?;
        tracing::info!(pool_size, "PgStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) fn row_to_site(row: &PgRow) -> Result<Site, StorageError> {
    Ok(Site {
        id: row.try_get("id")?,
        slug: row.try_get("slug")?,
        niche: row.try_get("niche")?,
        city: row.try_get("city")?,
        partner_email: row.try_get("partner_email")?,
    })
}

pub(crate) fn row_to_lead(row: &PgRow) -> Result<Lead, StorageError> {
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
