//! Storage types shared across backends

use leadengine_core::{Lead, Site};
use serde::Serialize;

/// Result of recording one lead: the resolved site, the stored lead and
/// whether the site row was created by this call.
#[derive(Debug, Clone, Serialize)]
pub struct RecordedLead {
    pub site: Site,
    pub lead: Lead,
    pub site_created: bool,
}

/// Insert timestamp truncated to microseconds, the finest resolution both
/// backends store.
pub(crate) fn lead_timestamp() -> chrono::DateTime<chrono::Utc> {
    use chrono::SubsecRound as _;
    chrono::Utc::now().trunc_subsecs(6)
}

/// Convert a `COUNT(*)` result to `u64`, treating negatives as zero.
pub(crate) fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
