use anyhow::Result;
use notehub_core::NoteHubConfig;
use notehub_http::{AppState, create_router};
use std::sync::Arc;

use crate::build_page_service;

pub(crate) async fn run(config: &NoteHubConfig, port: u16, host: String) -> Result<()> {
    let page_service = build_page_service(config)?;
    let state = Arc::new(AppState { page_service });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!(api_url = %config.api_url, "Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
