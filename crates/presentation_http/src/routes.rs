//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// Bodies larger than `max_body_bytes` are rejected before reaching a handler.
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/", get(handlers::health::health_check))
        .route("/health", get(handlers::health::health_check))
        // Telegram webhook
        .route("/webhooks", post(handlers::webhook::handle_webhook))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_bytes)),
        )
        // Attach state
        .with_state(state)
}
