//! Core types and helpers for the lead engine
//!
//! Domain types shared across the storage, service, HTTP and site
//! generation crates.

mod constants;
mod env_config;
mod error;
mod lead;
mod niche;
mod site;
mod slug;

pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::InputError;
pub use lead::{Lead, LeadSubmission, NewLead, RoutingOutcome};
pub use niche::{filter_niches, seed_niches, Niche};
pub use site::{NewSite, Site};
pub use slug::{site_slug, slugify, title_case};
