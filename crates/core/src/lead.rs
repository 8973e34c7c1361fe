use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{InputError, ROUTED_MESSAGE, UNROUTED_MESSAGE};

/// A captured form submission tied to a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub site_id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub routed: bool,
}

impl Lead {
    #[must_use]
    pub const fn routing(&self) -> RoutingOutcome {
        if self.routed { RoutingOutcome::Routed } else { RoutingOutcome::Unrouted }
    }
}

/// Raw form fields as posted by a generated site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub site_slug: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

impl LeadSubmission {
    /// Check required fields and normalize the submission for insert.
    ///
    /// Name and phone are trimmed; optional fields that trim to empty become
    /// `None`. The slug is kept verbatim since sites are looked up by exact
    /// match, but a slug of only whitespace is rejected.
    pub fn validate(self) -> Result<NewLead, InputError> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        if name.is_empty() || phone.is_empty() {
            return Err(InputError::MissingContact);
        }
        if self.site_slug.trim().is_empty() {
            return Err(InputError::MissingSiteSlug);
        }
        Ok(NewLead {
            site_slug: self.site_slug,
            name: name.to_owned(),
            phone: phone.to_owned(),
            email: non_blank(self.email),
            service: non_blank(self.service),
            message: non_blank(self.message),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// A validated lead, ready to be recorded against its site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub site_slug: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

/// Terminal routing state of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingOutcome {
    Routed,
    Unrouted,
}

impl RoutingOutcome {
    /// Acknowledgment shown to the visitor.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Routed => ROUTED_MESSAGE,
            Self::Unrouted => UNROUTED_MESSAGE,
        }
    }
}
