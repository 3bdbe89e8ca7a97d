use crate::nats::NoteEventSink;
use crate::session::{SessionStore, DEFAULT_SESSION_BASE_URL};
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Session registry, owned by the process and shared by every handler
    pub store: Arc<SessionStore>,

    /// Optional receiver of note events (NATS when configured)
    pub events: Option<Arc<dyn NoteEventSink>>,
}

impl AppState {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            store,
            events: None,
        }
    }

    /// Attach a note event sink
    pub fn with_events(mut self, events: Arc<dyn NoteEventSink>) -> Self {
        self.events = Some(events);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SessionStore::new(DEFAULT_SESSION_BASE_URL)))
    }
}
