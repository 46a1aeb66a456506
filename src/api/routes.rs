//! Router assembly for the HTTP API

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::handlers;
use crate::AppState;

/// Build the application router with all routes and middleware layers
pub async fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/styles", get(handlers::styles))
        .route("/generate", post(handlers::generate))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
