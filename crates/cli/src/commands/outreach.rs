use std::sync::Arc;

use anyhow::Result;
use leadengine_service::{
    LogNotificationSink, NotificationSink, OutreachConfig, OutreachService,
    WebhookNotificationSink,
};

use crate::open_storage;

/// Webhook sink when `LEADENGINE_OUTREACH_WEBHOOK` is set, log sink otherwise.
pub(crate) fn notification_sink() -> Result<Arc<dyn NotificationSink>> {
    match std::env::var("LEADENGINE_OUTREACH_WEBHOOK") {
        Ok(url) if !url.trim().is_empty() => {
            tracing::info!(url = %url.trim(), "outreach notices go to webhook");
            Ok(Arc::new(WebhookNotificationSink::new(url.trim().to_owned())?))
        },
        _ => Ok(Arc::new(LogNotificationSink)),
    }
}

pub(crate) async fn run(database_url: Option<&str>) -> Result<()> {
    let storage = open_storage(database_url).await?;
    let service = OutreachService::new(storage, notification_sink()?, OutreachConfig::from_env());
    let report = service.run_scan().await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    if !report.failed.is_empty() {
        anyhow::bail!("{} outreach notice(s) could not be delivered", report.failed.len());
    }
    Ok(())
}
