use serde::{Deserialize, Serialize};

/// A single authored note in a whiteboard session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Participant who wrote the note
    pub author_id: String,

    /// Note body, stored verbatim
    #[serde(rename = "noteContent")]
    pub content: String,

    /// Caller-supplied timestamp (not validated)
    pub timestamp: i64,
}

/// Result of starting a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionOutcome {
    pub success: bool,
    pub message: String,

    /// Access URL of the session; on a duplicate start this is the existing URL
    pub session_url: String,
}

/// Result of publishing a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishNoteOutcome {
    pub success: bool,
    pub message: String,
}

/// Result of retrieving the notes of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveNotesOutcome {
    pub session_id: String,
    pub success: bool,
    pub message: String,

    /// Notes in insertion order (empty when the session is unknown)
    pub notes: Vec<Note>,
}
