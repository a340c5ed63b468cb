// src/server/mod.rs

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::CONFIG;
use crate::handlers;
use crate::state::AppState;

/// Assemble the HTTP router over the shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = match CONFIG.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(_) => {
            warn!(
                "invalid SIFT_CORS_ORIGIN '{}', allowing any origin",
                CONFIG.cors_origin
            );
            CorsLayer::new().allow_origin(Any)
        }
    }
    .allow_methods(Any)
    .allow_headers(Any);

    Router::new()
        .route(
            "/emails",
            get(handlers::list_emails).post(handlers::import_email),
        )
        .route("/emails/{id}", get(handlers::get_email))
        .route("/emails/{id}/analyze", post(handlers::analyze_email))
        .route("/emails/{id}/draft", post(handlers::draft_response))
        .route("/stats", get(handlers::inbox_stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
