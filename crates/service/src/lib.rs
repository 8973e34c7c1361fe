//! Service layer for the lead engine
//!
//! Centralizes business logic between the HTTP/CLI surfaces and storage.
//! Integrations with the outside world (partner outreach, search console
//! submission) go through the sink traits in [`notify`] and [`seo_service`].

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod intake_service;
pub mod notify;
mod outreach_service;
pub mod seo_service;

#[cfg(test)]
mod outreach_tests;

pub use error::ServiceError;
pub use intake_service::IntakeService;
pub use notify::{LogNotificationSink, NotificationSink, WebhookNotificationSink};
pub use outreach_service::{OutreachConfig, OutreachNotice, OutreachReport, OutreachService};
pub use seo_service::{LogSubmissionSink, SeoService, SubmissionSink};
