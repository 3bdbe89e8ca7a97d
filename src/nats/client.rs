use super::messages::NoteEvent;
use super::sink::NoteEventSink;
use anyhow::{Context, Result};
use async_nats::Client;
use tracing::info;

/// Default subject prefix for note events
pub const DEFAULT_SUBJECT_PREFIX: &str = "whiteboard.note";

pub struct NatsClient {
    client: Client,
    subject_prefix: String,
}

impl NatsClient {
    /// Connect to NATS server
    pub async fn connect(url: &str, subject_prefix: String) -> Result<Self> {
        info!("Connecting to NATS at {}", url);

        let client = async_nats::connect(url)
            .await
            .context("Failed to connect to NATS")?;

        info!("Connected to NATS successfully");

        Ok(Self {
            client,
            subject_prefix,
        })
    }

    /// Subject that events for a session are published to
    pub fn subject_for(&self, session_id: &str) -> String {
        note_subject(&self.subject_prefix, session_id)
    }
}

/// `<prefix>.<session_id>`
pub fn note_subject(prefix: &str, session_id: &str) -> String {
    format!("{}.{}", prefix, session_id)
}

#[async_trait::async_trait]
impl NoteEventSink for NatsClient {
    async fn note_published(&self, event: &NoteEvent) -> Result<()> {
        let subject = self.subject_for(&event.session_id);
        let payload = serde_json::to_vec(event)?;

        self.client
            .publish(subject.clone(), payload.into())
            .await
            .context("Failed to publish note event")?;

        info!(
            "Published note event to {} (author={}, bytes={})",
            subject,
            event.author_id,
            event.note_content.len()
        );

        Ok(())
    }

    fn name(&self) -> &str {
        "nats"
    }
}
