//! SiteStore implementation for PgStorage.

use async_trait::async_trait;
use leadengine_core::Site;

use super::{PgStorage, SITE_COLUMNS, row_to_site};
use crate::error::StorageError;
use crate::traits::SiteStore;
use crate::types::count_to_u64;

#[async_trait]
impl SiteStore for PgStorage {
    async fn get_site_by_slug(&self, slug: &str) -> Result<Option<Site>, StorageError> {
        let row = sqlx::query(&format!("SELECT {SITE_COLUMNS} FROM sites WHERE slug = $1"))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_site(&r)).transpose()
    }

    async fn sites_without_partner(&self) -> Result<Vec<Site>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SITE_COLUMNS} FROM sites WHERE partner_email IS NULL ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_site).collect()
    }

    async fn set_partner(
        &self,
        slug: &str,
        partner_email: Option<&str>,
    ) -> Result<bool, StorageError> {
        let result = sqlx::query("UPDATE sites SET partner_email = $1 WHERE slug = $2")
            .bind(partner_email)
            .bind(slug)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_sites(&self) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM sites").fetch_one(&self.pool).await?;
        Ok(count_to_u64(count))
    }
}
