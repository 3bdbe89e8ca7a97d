use super::state::AppState;
use crate::nats::NoteEvent;
use crate::session::{PublishNoteOutcome, RetrieveNotesOutcome, StartSessionOutcome};
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
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub session_id: String,

    #[serde(default)]
    pub creator_id: String,

    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishNoteRequest {
    #[serde(default)]
    pub author_id: String,

    #[serde(default)]
    pub note_content: String,

    #[serde(default)]
    pub timestamp: i64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /sessions
/// Start a new whiteboard session
pub async fn start_session(
    State(state): State<AppState>,
    Json(req): Json<StartSessionRequest>,
) -> Json<StartSessionOutcome> {
    let outcome = state
        .store
        .start_session(&req.session_id, &req.creator_id, &req.topic)
        .await;

    Json(outcome)
}

/// POST /sessions/:session_id/notes
/// Publish a note to an existing session
pub async fn publish_note(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<PublishNoteRequest>,
) -> Json<PublishNoteOutcome> {
    let outcome = state
        .store
        .publish_note(&session_id, &req.author_id, &req.note_content, req.timestamp)
        .await;

    // Fan-out runs detached; the note is already stored and the caller
    // never waits on the broker
    if outcome.success {
        if let Some(events) = state.events.clone() {
            let event = NoteEvent::new(&session_id, &req.author_id, &req.note_content, req.timestamp);
            tokio::spawn(async move {
                if let Err(e) = events.note_published(&event).await {
                    error!("Failed to forward note event via {}: {}", events.name(), e);
                }
            });
        }
    }

    Json(outcome)
}

/// GET /sessions/:session_id/notes
/// Retrieve all notes of a session in publish order
pub async fn retrieve_session_notes(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<RetrieveNotesOutcome> {
    Json(state.store.retrieve_notes(&session_id).await)
}

/// GET /health
/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            sessions: state.store.session_count().await,
        }),
    )
}
