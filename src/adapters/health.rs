//! Health Endpoints - Liveness and Readiness Probes
//!
//! Serves `/live` and `/ready` on the configured bind address.
//! `/ready` flips to 503 when the shutdown sequence starts, giving any
//! supervisor a window to stop routing to the process before it exits.

use anyhow::{Context, Result};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tokio::sync::watch;
use tracing::info;

/// Serve the health endpoints until the listener is torn down.
pub async fn serve(bind_address: &str, ready_rx: watch::Receiver<bool>) -> Result<()> {
    let app = Router::new()
        .route("/live", get(|| async { StatusCode::OK }))
        .route(
            "/ready",
            get(|State(rx): State<watch::Receiver<bool>>| async move {
                if *rx.borrow() {
                    StatusCode::OK
                } else {
                    StatusCode::SERVICE_UNAVAILABLE
                }
            }),
        )
        .with_state(ready_rx);

    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind health server to {bind_address}"))?;

    info!(address = bind_address, "Health server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
