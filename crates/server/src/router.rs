use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::api::handlers;

pub fn create_router() -> Router {
    Router::new()
        // Episode endpoints
        .route("/api/v1/episodes", post(handlers::process_episodes))
        // Health endpoint
        .route("/api/v1/health", get(handlers::health))
        // Batches are accepted whatever their size
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
