//! HTTP API for the lead engine.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod api_types;
mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use leadengine_service::{IntakeService, OutreachService};

pub use api_types::{LeadResponse, VersionResponse};

/// Spawns a background task that runs the partner outreach scan on a fixed
/// interval.
///
/// The first scan runs immediately. Errors are logged but do not stop the
/// loop; the next tick retries.
pub fn start_outreach_scheduler(outreach: Arc<OutreachService>, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            tracing::debug!("outreach scheduler: scanning unassigned sites");
            let service = Arc::clone(&outreach);
            let result = tokio::spawn(async move { service.run_scan().await }).await;
            match result {
                Ok(Ok(report)) => {
                    if !report.delivered.is_empty() || !report.failed.is_empty() {
                        tracing::info!(
                            scanned = report.scanned,
                            delivered = report.delivered.len(),
                            failed = report.failed.len(),
                            "outreach scan finished"
                        );
                    }
                },
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, "outreach scan failed");
                },
                Err(e) => {
                    tracing::warn!(error = ?e, "outreach scan panicked");
                },
            }
        }
    });
}

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Lead intake (validation, site resolution, routing)
    pub intake: Arc<IntakeService>,
}

/// CORS policy for the lead endpoint.
///
/// With no configured origins every origin, method and header is allowed,
/// which suits local demos only; a warning is logged. Otherwise only the
/// listed origins may post. Origins that are not valid header values are
/// skipped.
#[must_use]
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        tracing::warn!(
            "CORS allows any origin; set LEADENGINE_CORS_ORIGINS to restrict lead submissions"
        );
        return CorsLayer::permissive();
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "ignoring invalid CORS origin");
                None
            },
        })
        .collect();
    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

pub fn create_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/lead", post(handlers::leads::submit_lead))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
