use std::sync::Arc;
use std::time::Duration;

use leadengine_core::{LeadSubmission, MAX_INTAKE_ATTEMPTS, NewSite};
use leadengine_storage::{LeadStore, RecordedLead, StorageBackend};

use crate::ServiceError;

/// Delay before the n-th retry of a conflicting intake.
const RETRY_BASE_DELAY_MS: u64 = 25;

/// Accepts lead submissions from generated sites.
pub struct IntakeService {
    storage: Arc<StorageBackend>,
}

impl IntakeService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Validate a submission, resolve its site and record the lead.
    ///
    /// The site lookup/creation, lead insert and routing flag are committed
    /// together. A conflicting transaction (duplicate slug, busy database)
    /// is rerun up to [`MAX_INTAKE_ATTEMPTS`] times before
    /// [`ServiceError::Conflict`] is returned. Invalid input never touches
    /// storage.
    pub async fn submit(&self, submission: LeadSubmission) -> Result<RecordedLead, ServiceError> {
        let lead = submission.validate()?;
        let site = NewSite::from_slug(&lead.site_slug);

        let mut attempt = 1;
        let recorded = loop {
            match self.storage.record_lead(&site, &lead).await {
                Ok(recorded) => break recorded,
                Err(e) if e.is_retryable() && attempt < MAX_INTAKE_ATTEMPTS => {
                    tracing::warn!(
                        slug = %site.slug,
                        attempt,
                        error = %e,
                        "lead intake conflicted, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(RETRY_BASE_DELAY_MS * attempt as u64))
                        .await;
                    attempt += 1;
                },
                Err(e) if e.is_retryable() => {
                    return Err(ServiceError::Conflict(format!(
                        "site '{}' is being updated concurrently, please retry: {e}",
                        site.slug
                    )));
                },
                Err(e) => return Err(e.into()),
            }
        };

        if recorded.site_created {
            tracing::info!(
                slug = %recorded.site.slug,
                niche = %recorded.site.niche,
                city = %recorded.site.city,
                "site created from first lead"
            );
        }
        match recorded.site.partner_email.as_deref() {
            Some(partner) if recorded.lead.routed => tracing::info!(
                lead_id = recorded.lead.id,
                slug = %recorded.site.slug,
                partner,
                "lead routed to partner"
            ),
            _ => tracing::info!(
                lead_id = recorded.lead.id,
                slug = %recorded.site.slug,
                "lead received, no partner assigned"
            ),
        }
        Ok(recorded)
    }
}
