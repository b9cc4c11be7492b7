//! HTTP API: `GET /`, `GET /agents`, `POST /recommend`.

pub mod error;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::engine::RecommendationEngine;

/// Build the API router.
///
/// With `permissive_cors` every origin, method and header is allowed and
/// credentials are accepted.
pub fn router(engine: Arc<RecommendationEngine>, permissive_cors: bool) -> Router {
    let app = Router::new()
        .route("/", get(handlers::root))
        .route("/agents", get(handlers::list_agents))
        .route("/recommend", post(handlers::recommend))
        .with_state(engine);

    if permissive_cors {
        app.layer(CorsLayer::very_permissive())
    } else {
        app
    }
}

/// Bind `addr` and serve the API until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener fails.
pub async fn run_server(
    addr: &str,
    engine: Arc<RecommendationEngine>,
    permissive_cors: bool,
) -> anyhow::Result<()> {
    let addr: SocketAddr = addr.parse()?;

    if permissive_cors {
        tracing::warn!("CORS allows all origins; restrict it before exposing this server publicly");
    }

    let app = router(engine, permissive_cors);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
