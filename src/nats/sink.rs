use super::messages::NoteEvent;
use anyhow::Result;

/// Receiver of note events
///
/// Implementations:
/// - `NatsClient`: publishes each event to a NATS subject
#[async_trait::async_trait]
pub trait NoteEventSink: Send + Sync {
    /// Called once for every note that was stored
    async fn note_published(&self, event: &NoteEvent) -> Result<()>;

    /// Sink name for logging
    fn name(&self) -> &str;
}
