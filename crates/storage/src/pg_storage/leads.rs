//! LeadStore implementation for PgStorage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use leadengine_core::{Lead, NewLead, NewSite};

use super::{LEAD_COLUMNS, PgStorage, SITE_COLUMNS, row_to_lead, row_to_site};
use crate::error::StorageError;
use crate::traits::LeadStore;
use crate::types::{RecordedLead, count_to_u64, lead_timestamp};

#[async_trait]
impl LeadStore for PgStorage {
    async fn record_lead(
        &self,
        site: &NewSite,
        lead: &NewLead,
    ) -> Result<RecordedLead, StorageError> {
        let mut tx = self.pool.begin().await?;

        // Under READ COMMITTED a concurrent insert of the same slug blocks
        // here until it commits, then this becomes a no-op and the SELECT
        // below sees the committed row.
        let inserted = sqlx::query(
            "INSERT INTO sites (slug, niche, city, partner_email) VALUES ($1, $2, $3, NULL)
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(&site.slug)
        .bind(&site.niche)
        .bind(&site.city)
        .execute(&mut *tx)
        .await?;
        let row = sqlx::query(&format!("SELECT {SITE_COLUMNS} FROM sites WHERE slug = $1"))
            .bind(&site.slug)
            .fetch_one(&mut *tx)
            .await?;
        let resolved = row_to_site(&row)?;

        let created_at = lead_timestamp();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO leads (site_id, name, phone, email, service, message, created_at, routed)
             VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE)
             RETURNING id",
        )
        .bind(resolved.id)
        .bind(&lead.name)
        .bind(&lead.phone)
        .bind(&lead.email)
        .bind(&lead.service)
        .bind(&lead.message)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await?;

        let mut stored = Lead {
            id,
            site_id: resolved.id,
            name: lead.name.clone(),
            phone: lead.phone.clone(),
            email: lead.email.clone(),
            service: lead.service.clone(),
            message: lead.message.clone(),
            created_at,
            routed: false,
        };

        if resolved.has_partner() {
            sqlx::query("UPDATE leads SET routed = TRUE WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            stored.routed = true;
        }

        tx.commit().await?;
        Ok(RecordedLead { site: resolved, lead: stored, site_created: inserted.rows_affected() > 0 })
    }

    async fn get_lead(&self, id: i64) -> Result<Option<Lead>, StorageError> {
        let row = sqlx::query(&format!("SELECT {LEAD_COLUMNS} FROM leads WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_lead(&r)).transpose()
    }

    async fn leads_for_site(&self, site_id: i64) -> Result<Vec<Lead>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {LEAD_COLUMNS} FROM leads WHERE site_id = $1 ORDER BY created_at, id"
        ))
        .bind(site_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_lead).collect()
    }

    async fn count_leads_since(
        &self,
        site_id: i64,
        since: DateTime<Utc>,
    ) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM leads WHERE site_id = $1 AND created_at >= $2")
                .bind(site_id)
                .bind(since)
                .fetch_one(&self.pool)
                .await?;
        Ok(count_to_u64(count))
    }

    async fn count_leads(&self) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM leads").fetch_one(&self.pool).await?;
        Ok(count_to_u64(count))
    }
}
