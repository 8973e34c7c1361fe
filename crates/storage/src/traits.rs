//! Storage backend trait abstraction
//!
//! Async domain traits implemented by every backend and by
//! [`crate::StorageBackend`] through enum dispatch.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use leadengine_core::{Lead, NewLead, NewSite, Site};

use crate::error::StorageError;
use crate::types::RecordedLead;

/// Site lookup and partner assignment.
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// Get a site by exact slug match.
    async fn get_site_by_slug(&self, slug: &str) -> Result<Option<Site>, StorageError>;

    /// Sites with no partner contact, ordered by id.
    async fn sites_without_partner(&self) -> Result<Vec<Site>, StorageError>;

    /// Assign (or clear, with `None`) the partner contact of a site.
    /// Returns `false` when no site has this slug.
    async fn set_partner(
        &self,
        slug: &str,
        partner_email: Option<&str>,
    ) -> Result<bool, StorageError>;

    /// Total number of sites.
    async fn count_sites(&self) -> Result<u64, StorageError>;
}

/// Lead intake and counting.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Resolve-or-create the site, insert the lead and apply the routing
    /// decision, all in one transaction.
    ///
    /// `site` is only inserted when no row has `site.slug`; an existing site
    /// is used unchanged.
    async fn record_lead(
        &self,
        site: &NewSite,
        lead: &NewLead,
    ) -> Result<RecordedLead, StorageError>;

    /// Get lead by ID.
    async fn get_lead(&self, id: i64) -> Result<Option<Lead>, StorageError>;

    /// All leads of a site, oldest first.
    async fn leads_for_site(&self, site_id: i64) -> Result<Vec<Lead>, StorageError>;

    /// Leads of a site created at or after `since`.
    async fn count_leads_since(
        &self,
        site_id: i64,
        since: DateTime<Utc>,
    ) -> Result<u64, StorageError>;

    /// Total number of leads.
    async fn count_leads(&self) -> Result<u64, StorageError>;
}
