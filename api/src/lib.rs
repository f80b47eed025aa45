//! HTTP surface of the Fait AI proxy.
//!
//! Two routes: `GET /health` (liveness) and `POST /api/ai` (question proxy).
//! Transport concerns live here; prompt assembly and the upstream client
//! live in `llm-service`.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

mod core;
mod error_handler;
mod routes;

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{AppError, AppResult};

use crate::routes::{ai::ai_route::ask_ai, health_route::health};

/// Builds the application router over shared state.
///
/// Exposed separately from [`start`] so tests can drive the router directly
/// without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/ai", post(ask_ai))
        .with_state(state)
}

/// Loads config from the environment, binds the listener, and serves until
/// Ctrl+C.
pub async fn start() -> AppResult<()> {
    let state = Arc::new(AppState::from_env()?);
    let addr = format!("0.0.0.0:{}", state.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;

    info!(%addr, "Fait AI Proxy Server running");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
