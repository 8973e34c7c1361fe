//! Output port for partner outreach notices.
//!
//! The outreach scan only decides *that* a notice is due; a
//! [`NotificationSink`] decides how it leaves the process.

use std::time::Duration;

use async_trait::async_trait;

use crate::{OutreachNotice, ServiceError};

/// Delivers outreach notices.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, notice: &OutreachNotice) -> Result<(), ServiceError>;
}

/// Writes notices to the log. Used when no webhook is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotificationSink;

#[async_trait]
impl NotificationSink for LogNotificationSink {
    async fn deliver(&self, notice: &OutreachNotice) -> Result<(), ServiceError> {
        tracing::info!(
            slug = %notice.site_slug,
            count = notice.lead_count,
            destination = %notice.destination,
            subject = %notice.subject,
            "outreach notice drafted\n{}",
            notice.body
        );
        Ok(())
    }
}

/// POSTs each notice as JSON to a webhook (mail relay, CRM, chat).
pub struct WebhookNotificationSink {
    client: reqwest::Client,
    url: String,
}

impl std::fmt::Debug for WebhookNotificationSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookNotificationSink").field("url", &self.url).finish()
    }
}

impl WebhookNotificationSink {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(url: String) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl NotificationSink for WebhookNotificationSink {
    async fn deliver(&self, notice: &OutreachNotice) -> Result<(), ServiceError> {
        let response = self.client.post(&self.url).json(notice).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Delivery(format!(
                "webhook returned HTTP {}: {body}",
                status.as_u16()
            )));
        }
        tracing::debug!(slug = %notice.site_slug, url = %self.url, "outreach notice delivered");
        Ok(())
    }
}
