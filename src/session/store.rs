use super::note::{Note, PublishNoteOutcome, RetrieveNotesOutcome, StartSessionOutcome};
use super::url::session_url;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{info, warn};

const EMPTY_SESSION_ID: &str = "Session ID must not be empty.";

/// Number of note characters echoed into the request log
const LOG_PREVIEW_CHARS: usize = 20;

/// State of one registered session
#[derive(Debug)]
struct Session {
    /// Assigned once at creation, never changed
    access_url: String,

    /// Append-only, insertion order
    notes: Vec<Note>,
}

/// In-memory registry of whiteboard sessions and their notes
///
/// All mutation goes through a single write lock, so the duplicate check in
/// `start_session` and the append in `publish_note` cannot interleave with
/// another writer. Sessions are never removed.
pub struct SessionStore {
    /// Base path that session ids are appended to
    base_url: String,

    /// Registered sessions (session_id → session)
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new session
    ///
    /// A second start with the same id leaves the session untouched and echoes
    /// the URL assigned by the first start.
    pub async fn start_session(
        &self,
        session_id: &str,
        creator_id: &str,
        topic: &str,
    ) -> StartSessionOutcome {
        info!(
            "Received start session request for session {} (creator: {}, topic: {})",
            session_id, creator_id, topic
        );

        if session_id.trim().is_empty() {
            warn!("Rejected start session request with empty session id");
            return StartSessionOutcome {
                success: false,
                message: EMPTY_SESSION_ID.to_string(),
                session_url: String::new(),
            };
        }

        let mut sessions = self.sessions.write().await;

        match sessions.entry(session_id.to_string()) {
            Entry::Occupied(existing) => StartSessionOutcome {
                success: false,
                message: format!("Session ID {} already exists.", session_id),
                session_url: existing.get().access_url.clone(),
            },
            Entry::Vacant(slot) => {
                let access_url = session_url(&self.base_url, session_id);
                slot.insert(Session {
                    access_url: access_url.clone(),
                    notes: Vec::new(),
                });

                info!("Session {} started at {}", session_id, access_url);

                StartSessionOutcome {
                    success: true,
                    message: format!("Whiteboard session {} started successfully.", session_id),
                    session_url: access_url,
                }
            }
        }
    }

    /// Append a note to an existing session
    pub async fn publish_note(
        &self,
        session_id: &str,
        author_id: &str,
        content: &str,
        timestamp: i64,
    ) -> PublishNoteOutcome {
        info!(
            "Received publish note request for session {} (author: {}, content: {})",
            session_id,
            author_id,
            preview(content)
        );

        if session_id.trim().is_empty() {
            return PublishNoteOutcome {
                success: false,
                message: EMPTY_SESSION_ID.to_string(),
            };
        }

        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(session_id) {
            Some(session) => {
                session.notes.push(Note {
                    author_id: author_id.to_string(),
                    content: content.to_string(),
                    timestamp,
                });

                PublishNoteOutcome {
                    success: true,
                    message: format!("Note published successfully to session {}", session_id),
                }
            }
            None => PublishNoteOutcome {
                success: false,
                message: format!(
                    "Session ID {} does not exist. Please start a session first.",
                    session_id
                ),
            },
        }
    }

    /// Snapshot of all notes of a session, in the order they were published
    pub async fn retrieve_notes(&self, session_id: &str) -> RetrieveNotesOutcome {
        info!("Received retrieve notes request for session {}", session_id);

        if session_id.trim().is_empty() {
            return RetrieveNotesOutcome {
                session_id: session_id.to_string(),
                success: false,
                message: EMPTY_SESSION_ID.to_string(),
                notes: Vec::new(),
            };
        }

        let sessions = self.sessions.read().await;

        match sessions.get(session_id) {
            Some(session) => RetrieveNotesOutcome {
                session_id: session_id.to_string(),
                success: true,
                message: format!("Notes retrieved successfully for session {}", session_id),
                notes: session.notes.clone(),
            },
            None => RetrieveNotesOutcome {
                session_id: session_id.to_string(),
                success: false,
                message: format!("Session ID {} not found.", session_id),
                notes: Vec::new(),
            },
        }
    }

    /// Number of registered sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// First few characters of a note, for log lines
fn preview(content: &str) -> String {
    let mut shown: String = content.chars().take(LOG_PREVIEW_CHARS).collect();
    shown.push_str("...");
    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_content() {
        let content = "a".repeat(50);
        assert_eq!(preview(&content), format!("{}...", "a".repeat(20)));
    }

    #[test]
    fn preview_respects_char_boundaries() {
        assert_eq!(preview("héllo wörld"), "héllo wörld...");
        assert_eq!(preview(&"é".repeat(30)).chars().count(), 23);
    }

    #[tokio::test]
    async fn whitespace_id_is_rejected() {
        let store = SessionStore::new("https://example.test/session/");

        let outcome = store.start_session("   ", "u1", "demo").await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, EMPTY_SESSION_ID);
        assert_eq!(store.session_count().await, 0);
    }
}
