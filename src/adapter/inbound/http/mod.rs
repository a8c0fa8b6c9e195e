//! HTTP trigger for check cycles.
//!
//! `GET /poll` (and its alias `GET /poll_mlb`) runs one cycle and answers
//! with the outcome as JSON, or `500` with the error text. Concurrent
//! requests run concurrent cycles; nothing serializes them.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::error::Result;
use crate::port::CycleRunner;

type SharedRunner = Arc<dyn CycleRunner>;

/// Build the trigger router around a cycle runner.
pub fn router(runner: SharedRunner) -> Router {
    Router::new()
        .route("/poll", get(poll))
        .route("/poll_mlb", get(poll))
        .route("/health", get(health))
        .with_state(runner)
}

async fn poll(State(runner): State<SharedRunner>) -> Response {
    match runner.run_cycle().await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Serve the trigger until ctrl-c.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound.
pub async fn serve(runner: SharedRunner, bind: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "Trigger listening");

    axum::serve(listener, router(runner))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;
    Ok(())
}
