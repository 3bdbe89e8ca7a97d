//! Whiteboard session registry
//!
//! This module provides the `SessionStore` that owns all session state:
//! - Session registration with a derived access URL
//! - Append-only note storage per session
//! - Snapshot retrieval of accumulated notes

mod note;
mod store;
mod url;

pub use note::{Note, PublishNoteOutcome, RetrieveNotesOutcome, StartSessionOutcome};
pub use store::SessionStore;
pub use url::{session_url, DEFAULT_SESSION_BASE_URL};
