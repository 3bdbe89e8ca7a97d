pub mod config;
pub mod http;
pub mod nats;
pub mod server;
pub mod session;

pub use config::Config;
pub use http::{create_router, AppState};
pub use nats::{NatsClient, NoteEvent, NoteEventSink};
pub use session::{
    session_url, Note, PublishNoteOutcome, RetrieveNotesOutcome, SessionStore,
    StartSessionOutcome,
};
