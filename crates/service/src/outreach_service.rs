//! Partner outreach trigger.
//!
//! Sites without a partner that keep producing leads are worth selling.
//! Each scan counts recent leads per unassigned site and drafts a notice
//! for every site at or over the threshold.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use leadengine_core::{
    DEFAULT_LEAD_THRESHOLD, DEFAULT_OUTREACH_WINDOW_DAYS, Site, env_parse_with_default,
};
use leadengine_storage::{LeadStore, SiteStore, StorageBackend};
use serde::Serialize;

use crate::{NotificationSink, ServiceError};

/// Thresholds and addressing for the outreach scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutreachConfig {
    pub threshold: u64,
    pub window_days: i64,
    pub recipient: Option<String>,
}

impl Default for OutreachConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_LEAD_THRESHOLD,
            window_days: DEFAULT_OUTREACH_WINDOW_DAYS,
            recipient: None,
        }
    }
}

impl OutreachConfig {
    /// Read `LEADENGINE_LEAD_THRESHOLD`, `LEADENGINE_OUTREACH_WINDOW_DAYS`
    /// and `LEADENGINE_OUTREACH_RECIPIENT`.
    #[must_use]
    pub fn from_env() -> Self {
        let recipient = std::env::var("LEADENGINE_OUTREACH_RECIPIENT")
            .ok()
            .map(|r| r.trim().to_owned())
            .filter(|r| !r.is_empty());
        Self {
            threshold: env_parse_with_default("LEADENGINE_LEAD_THRESHOLD", DEFAULT_LEAD_THRESHOLD),
            window_days: window_days_or_default(env_parse_with_default(
                "LEADENGINE_OUTREACH_WINDOW_DAYS",
                DEFAULT_OUTREACH_WINDOW_DAYS,
            )),
            recipient,
        }
    }
}

/// Longest window accepted from the environment (about 100 years).
const MAX_OUTREACH_WINDOW_DAYS: i64 = 36_500;

/// Keep `days` if it is in `1..=MAX_OUTREACH_WINDOW_DAYS`, else warn and use
/// the default.
pub(crate) fn window_days_or_default(days: i64) -> i64 {
    if (1..=MAX_OUTREACH_WINDOW_DAYS).contains(&days) {
        return days;
    }
    tracing::warn!(
        var = "LEADENGINE_OUTREACH_WINDOW_DAYS",
        value = days,
        default = DEFAULT_OUTREACH_WINDOW_DAYS,
        "outreach window out of range, using default"
    );
    DEFAULT_OUTREACH_WINDOW_DAYS
}

/// Drafted outreach message for one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutreachNotice {
    pub site_slug: String,
    pub niche: String,
    pub city: String,
    pub lead_count: u64,
    pub destination: String,
    pub subject: String,
    pub body: String,
}

impl OutreachNotice {
    fn draft(site: &Site, lead_count: u64, config: &OutreachConfig) -> Self {
        let destination = config
            .recipient
            .clone()
            .unwrap_or_else(|| format!("local partners in {}", site.city));
        let subject = format!("{} leads available in {}", site.niche, site.city);
        let body = format!(
            "Hello,\n\nWe operate {niche} websites in {city} and have generated {lead_count} \
             high-intent leads over the past {days} days. We are looking for a local business \
             partner to take these leads on a pay-per-lead or subscription basis. If you are \
             interested, please reply to discuss pricing.\n\nRegards,\nLocal Authority Lead Engine",
            niche = site.niche,
            city = site.city,
            days = config.window_days,
        );
        Self {
            site_slug: site.slug.clone(),
            niche: site.niche.clone(),
            city: site.city.clone(),
            lead_count,
            destination,
            subject,
            body,
        }
    }
}

/// Outcome of one outreach scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OutreachReport {
    /// Unassigned sites inspected.
    pub scanned: usize,
    /// Notices handed to the sink successfully.
    pub delivered: Vec<OutreachNotice>,
    /// Notices the sink rejected.
    pub failed: Vec<OutreachNotice>,
}

pub struct OutreachService {
    storage: Arc<StorageBackend>,
    sink: Arc<dyn NotificationSink>,
    config: OutreachConfig,
}

impl OutreachService {
    #[must_use]
    pub fn new(
        storage: Arc<StorageBackend>,
        sink: Arc<dyn NotificationSink>,
        config: OutreachConfig,
    ) -> Self {
        Self { storage, sink, config }
    }

    #[must_use]
    pub const fn config(&self) -> &OutreachConfig {
        &self.config
    }

    /// Scan against the current time.
    pub async fn run_scan(&self) -> Result<OutreachReport, ServiceError> {
        self.scan_at(Utc::now()).await
    }

    /// Scan counting leads created in `[now - window, now]`.
    ///
    /// Storage errors abort the scan. A sink failure is logged and recorded
    /// in the report; remaining sites are still processed.
    pub async fn scan_at(&self, now: DateTime<Utc>) -> Result<OutreachReport, ServiceError> {
        let cutoff = Duration::try_days(self.config.window_days)
            .filter(|window| *window > Duration::zero())
            .and_then(|window| now.checked_sub_signed(window))
            .ok_or_else(|| {
                ServiceError::Config(format!(
                    "outreach window of {} days is out of range",
                    self.config.window_days
                ))
            })?;
        let sites = self.storage.sites_without_partner().await?;
        let mut report = OutreachReport { scanned: sites.len(), ..OutreachReport::default() };

        for site in &sites {
            let count = self.storage.count_leads_since(site.id, cutoff).await?;
            if count < self.config.threshold {
                continue;
            }
            tracing::info!(
                slug = %site.slug,
                count,
                city = %site.city,
                "lead threshold reached, initiating partner outreach"
            );
            let notice = OutreachNotice::draft(site, count, &self.config);
            match self.sink.deliver(&notice).await {
                Ok(()) => report.delivered.push(notice),
                Err(e) => {
                    tracing::warn!(slug = %site.slug, error = %e, "outreach delivery failed");
                    report.failed.push(notice);
                },
            }
        }
        Ok(report)
    }
}
