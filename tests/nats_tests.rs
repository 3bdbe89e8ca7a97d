use whiteboard_service::nats::{note_subject, NoteEvent, DEFAULT_SUBJECT_PREFIX};

#[test]
fn test_note_event_serialization() {
    let event = NoteEvent::new("abc", "u2", "hello", 1000);

    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"session_id\":\"abc\""));
    assert!(json.contains("\"note_content\":\"hello\""));
    assert!(json.contains("\"timestamp\":1000"));

    let deserialized: NoteEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.session_id, "abc");
    assert_eq!(deserialized.author_id, "u2");
    assert_eq!(deserialized.timestamp, 1000);
}

#[test]
fn test_note_event_published_at_is_rfc3339() {
    let event = NoteEvent::new("abc", "u2", "hello", -5);

    assert!(chrono::DateTime::parse_from_rfc3339(&event.published_at).is_ok());
    assert_eq!(event.timestamp, -5);
}

#[test]
fn test_note_event_deserialization() {
    let json = r#"{
        "session_id": "room-7",
        "author_id": "alice",
        "note_content": "Ship it",
        "timestamp": 1700000000,
        "published_at": "2025-10-27T14:30:05Z"
    }"#;

    let event: NoteEvent = serde_json::from_str(json).unwrap();
    assert_eq!(event.session_id, "room-7");
    assert_eq!(event.note_content, "Ship it");
    assert_eq!(event.published_at, "2025-10-27T14:30:05Z");
}

#[test]
fn test_note_subject() {
    assert_eq!(
        note_subject(DEFAULT_SUBJECT_PREFIX, "abc"),
        "whiteboard.note.abc"
    );
    assert_eq!(note_subject("team.board", "r1"), "team.board.r1");
}
