//! HTTP API for browsing recorded sessions
//!
//! This module provides a REST API over the file store:
//! - GET /subjects - List subjects
//! - GET /subjects/:subject/sessions - List a subject's sessions (newest first)
//! - GET /subjects/:subject/sessions/:session_id - Session view (lazy summary)
//! - PUT /subjects/:subject/sessions/:session_id/title - Set a session title
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
