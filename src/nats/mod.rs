//! Note event fan-out over NATS

pub mod client;
pub mod messages;
mod sink;

pub use client::{note_subject, NatsClient, DEFAULT_SUBJECT_PREFIX};
pub use messages::NoteEvent;
pub use sink::NoteEventSink;
