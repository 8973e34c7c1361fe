use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use leadengine_http::{AppState, cors_layer, create_router, start_outreach_scheduler};
use leadengine_service::{IntakeService, OutreachConfig, OutreachService};

use crate::commands::outreach::notification_sink;
use crate::open_storage;

fn cors_origins() -> Vec<String> {
    std::env::var("LEADENGINE_CORS_ORIGINS")
        .map(|raw| {
            raw.split(',').map(str::trim).filter(|o| !o.is_empty()).map(str::to_owned).collect()
        })
        .unwrap_or_default()
}

pub(crate) async fn run(
    database_url: Option<&str>,
    host: String,
    port: u16,
    outreach_interval_secs: u64,
) -> Result<()> {
    let storage = open_storage(database_url).await?;
    let intake = Arc::new(IntakeService::new(Arc::clone(&storage)));

    if outreach_interval_secs > 0 {
        let outreach =
            OutreachService::new(Arc::clone(&storage), notification_sink()?, OutreachConfig::from_env());
        tracing::info!(
            every_secs = outreach_interval_secs,
            threshold = outreach.config().threshold,
            "partner outreach scheduler enabled"
        );
        start_outreach_scheduler(Arc::new(outreach), Duration::from_secs(outreach_interval_secs));
    } else {
        tracing::info!("partner outreach scheduler disabled");
    }

    let state = Arc::new(AppState { intake });
    let router = create_router(state, cors_layer(&cors_origins()));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
