//! Unified storage backend with enum dispatch.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use leadengine_core::{Lead, NewLead, NewSite, Site};

use crate::error::StorageError;
use crate::traits::{LeadStore, SiteStore};
use crate::types::RecordedLead;

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::SqliteStorage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::SqliteStorage),
    #[cfg(feature = "postgres")]
    Postgres(crate::PgStorage),
}

impl StorageBackend {
    /// Pick a backend from a database URL.
    ///
    /// `postgres://` and `postgresql://` select `PostgreSQL`. Anything else is
    /// a `SQLite` file path, with an optional `sqlite://` or `sqlite:` prefix.
    pub async fn connect(database_url: &str, pool_size: u32) -> Result<Self, StorageError> {
        if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
            return Self::connect_postgres(database_url, pool_size).await;
        }
        let path = database_url
            .strip_prefix("sqlite://")
            .or_else(|| database_url.strip_prefix("sqlite:"))
            .unwrap_or(database_url);
        Self::connect_sqlite(Path::new(path), pool_size).await
    }

    #[cfg(feature = "sqlite")]
    pub async fn new_sqlite(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::SqliteStorage::new(db_path, pool_size).await?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str, pool_size: u32) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url, pool_size).await?))
    }

    #[cfg(feature = "sqlite")]
    async fn connect_sqlite(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        Self::new_sqlite(db_path, pool_size).await
    }

    #[cfg(not(feature = "sqlite"))]
    async fn connect_sqlite(db_path: &Path, _pool_size: u32) -> Result<Self, StorageError> {
        Err(StorageError::UnsupportedUrl(db_path.display().to_string()))
    }

    #[cfg(feature = "postgres")]
    async fn connect_postgres(database_url: &str, pool_size: u32) -> Result<Self, StorageError> {
        Self::new_postgres(database_url, pool_size).await
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect_postgres(database_url: &str, _pool_size: u32) -> Result<Self, StorageError> {
        Err(StorageError::UnsupportedUrl(database_url.to_owned()))
    }

    /// Short backend name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

// ── SiteStore ────────────────────────────────────────────────────

#[async_trait]
impl SiteStore for StorageBackend {
    async fn get_site_by_slug(&self, slug: &str) -> Result<Option<Site>, StorageError> {
        dispatch!(self, SiteStore, get_site_by_slug(slug))
    }

    async fn sites_without_partner(&self) -> Result<Vec<Site>, StorageError> {
        dispatch!(self, SiteStore, sites_without_partner())
    }

    async fn set_partner(
        &self,
        slug: &str,
        partner_email: Option<&str>,
    ) -> Result<bool, StorageError> {
        dispatch!(self, SiteStore, set_partner(slug, partner_email))
    }

    async fn count_sites(&self) -> Result<u64, StorageError> {
        dispatch!(self, SiteStore, count_sites())
    }
}

// ── LeadStore ────────────────────────────────────────────────────

#[async_trait]
impl LeadStore for StorageBackend {
    async fn record_lead(
        &self,
        site: &NewSite,
        lead: &NewLead,
    ) -> Result<RecordedLead, StorageError> {
        dispatch!(self, LeadStore, record_lead(site, lead))
    }

    async fn get_lead(&self, id: i64) -> Result<Option<Lead>, StorageError> {
        dispatch!(self, LeadStore, get_lead(id))
    }

    async fn leads_for_site(&self, site_id: i64) -> Result<Vec<Lead>, StorageError> {
        dispatch!(self, LeadStore, leads_for_site(site_id))
    }

    async fn count_leads_since(
        &self,
        site_id: i64,
        since: DateTime<Utc>,
    ) -> Result<u64, StorageError> {
        dispatch!(self, LeadStore, count_leads_since(site_id, since))
    }

    async fn count_leads(&self) -> Result<u64, StorageError> {
        dispatch!(self, LeadStore, count_leads())
    }
}
