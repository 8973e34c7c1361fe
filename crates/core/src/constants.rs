//! Shared constants for the lead engine.
//!
//! Thresholds, default paths and fixed response strings used by more than
//! one crate.

/// City recorded for a site whose slug has no `{niche}_{city}` shape.
pub const UNKNOWN_CITY: &str = "Unknown";

/// Separator between the niche and city halves of a site slug.
pub const SLUG_SEPARATOR: char = '_';

/// Response text when a lead has been routed to the site's partner.
pub const ROUTED_MESSAGE: &str = "Thank you! Your request has been routed to our local partner.";

/// Response text when the site has no partner yet.
pub const UNROUTED_MESSAGE: &str = "Thank you for contacting us. We will reach out shortly.";

/// Validation detail returned when name or phone is blank.
pub const MISSING_CONTACT_MESSAGE: &str = "Name and phone are required.";

/// Leads within the outreach window that trigger partner outreach.
pub const DEFAULT_LEAD_THRESHOLD: u64 = 5;

/// Trailing window, in days, used when counting leads for outreach.
pub const DEFAULT_OUTREACH_WINDOW_DAYS: i64 = 30;

/// Minimum cost per click for a niche to be kept.
pub const DEFAULT_MIN_CPC: f64 = 10.0;

/// Maximum SEO difficulty for a niche to be kept.
pub const DEFAULT_MAX_DIFFICULTY: u32 = 40;

/// File name of the ranked niche list (JSON).
pub const TOP_NICHES_JSON: &str = "top_niches.json";

/// File name of the ranked niche list (CSV).
pub const TOP_NICHES_CSV: &str = "top_niches.csv";

/// Database connection pool: default maximum connections.
pub const DB_POOL_MAX_CONNECTIONS: u32 = 8;

/// Database connection pool: acquire timeout in seconds.
pub const DB_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Database connection pool: idle timeout in seconds.
pub const DB_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// `SQLite` busy timeout in seconds for writers waiting on the lock.
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 30;

/// Attempts made for one intake before a conflict is surfaced to the caller.
pub const MAX_INTAKE_ATTEMPTS: usize = 3;
