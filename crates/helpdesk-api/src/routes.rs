//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, compression, a body size
//! limit, and all endpoint handlers.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use helpdesk_core::config::HelpdeskConfig;
use helpdesk_core::error::{HelpdeskError, Result};

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
///
/// Routes are nested under `server.api_prefix` when one is configured.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/session/init", post(handlers::init_session))
        .route("/chat/message", post(handlers::chat_message))
        .route(
            "/session/{session_id}/history",
            get(handlers::session_history),
        )
        .route(
            "/session/{session_id}/summary",
            post(handlers::session_summary),
        )
        .route("/escalate", post(handlers::escalate))
        .route("/faqs", get(handlers::faqs))
        .route("/health", get(handlers::health));

    let routes = match state.config.server.normalized_prefix() {
        Some(prefix) => Router::new().nest(&prefix, routes),
        None => routes,
    };

    routes
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server on the configured address.
pub async fn start_server(config: &HelpdeskConfig, state: AppState) -> Result<()> {
    let addr = config.server.bind_addr();
    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HelpdeskError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| HelpdeskError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
