use serde::Serialize;

/// Acknowledgment returned to the visitor after a lead is stored.
#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
