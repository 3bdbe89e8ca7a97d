//! HTTP API for whiteboard sessions
//!
//! This module exposes the session store over JSON:
//! - POST /sessions - Start a session
//! - POST /sessions/:id/notes - Publish a note
//! - GET /sessions/:id/notes - Retrieve session notes
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::{HealthResponse, PublishNoteRequest, StartSessionRequest};
pub use routes::create_router;
pub use state::AppState;
