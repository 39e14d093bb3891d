//! A small user directory service, documented by its integration tests.
#![allow(missing_docs)]
use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

mod errors;
mod routes;
mod state;

pub mod users;

pub use self::errors::ApiErrorResponse;
use self::routes::app_router;
use self::state::AppState;

/// The user application, backed by an empty in-memory directory.
pub fn app() -> Router {
    app_router()
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new())
}

/// Binds `addr` then serves the application until shutdown.
///
/// # Errors
///
/// Fails when the address cannot be bound or when serving fails.
pub async fn run(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "user directory listening");

    serve(listener).await
}

/// Serves the application on an already bound listener.
///
/// # Errors
///
/// Fails when serving fails.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    axum::serve(listener, app())
        .await
        .context("serving user directory")
}
