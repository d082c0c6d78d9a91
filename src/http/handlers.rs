use super::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::error;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SetTitleRequest {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct SetTitleResponse {
    pub session_id: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /subjects
/// List subject names
pub async fn list_subjects(State(state): State<AppState>) -> impl IntoResponse {
    match state.browser.subjects() {
        Ok(subjects) => (StatusCode::OK, Json(subjects)).into_response(),
        Err(e) => {
            error!("Failed to list subjects: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to list subjects: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /subjects/:subject/sessions
/// List a subject's sessions, newest first
pub async fn list_sessions(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> impl IntoResponse {
    match state.browser.sessions(&subject) {
        Ok(sessions) => (StatusCode::OK, Json(sessions)).into_response(),
        Err(e) => {
            error!("Failed to list sessions for {}: {}", subject, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to list sessions: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /subjects/:subject/sessions/:session_id
/// Full session view; computes and caches the summary on first access
/// of a titled session
pub async fn get_session(
    State(state): State<AppState>,
    Path((subject, session_id)): Path<(String, String)>,
) -> impl IntoResponse {
    if !state.browser.session_exists(&subject, &session_id) {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Session {}/{} not found", subject, session_id),
            }),
        )
            .into_response();
    }

    match state.browser.session_view(&subject, &session_id).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => {
            error!("Failed to build session view: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to build session view: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// PUT /subjects/:subject/sessions/:session_id/title
/// Persist a session title
pub async fn set_title(
    State(state): State<AppState>,
    Path((subject, session_id)): Path<(String, String)>,
    Json(req): Json<SetTitleRequest>,
) -> impl IntoResponse {
    if !state.browser.session_exists(&subject, &session_id) {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Session {}/{} not found", subject, session_id),
            }),
        )
            .into_response();
    }

    match state.browser.set_title(&subject, &session_id, &req.title) {
        Ok(()) => (
            StatusCode::OK,
            Json(SetTitleResponse {
                session_id,
                title: req.title,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to set title: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to set title: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
