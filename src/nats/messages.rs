use serde::{Deserialize, Serialize};

/// Note event published to NATS after a note is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteEvent {
    pub session_id: String,
    pub author_id: String,
    pub note_content: String,
    pub timestamp: i64,  // Caller-supplied note timestamp
    pub published_at: String,  // RFC3339 server time
}

impl NoteEvent {
    pub fn new(session_id: &str, author_id: &str, note_content: &str, timestamp: i64) -> Self {
        Self {
            session_id: session_id.to_string(),
            author_id: author_id.to_string(),
            note_content: note_content.to_string(),
            timestamp,
            published_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
