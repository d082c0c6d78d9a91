use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Browsing
        .route("/subjects", get(handlers::list_subjects))
        .route(
            "/subjects/:subject/sessions",
            get(handlers::list_sessions),
        )
        .route(
            "/subjects/:subject/sessions/:session_id",
            get(handlers::get_session),
        )
        .route(
            "/subjects/:subject/sessions/:session_id/title",
            put(handlers::set_title),
        )
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
