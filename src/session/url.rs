/// Default base for generated session access URLs
pub const DEFAULT_SESSION_BASE_URL: &str = "https://virtualwhiteboard.com/session/";

/// Derive the access URL for a session.
///
/// Pure string formatting: the same base and id always give the same URL.
pub fn session_url(base: &str, session_id: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, session_id)
    } else {
        format!("{}/{}", base, session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_id_to_default_base() {
        assert_eq!(
            session_url(DEFAULT_SESSION_BASE_URL, "abc"),
            "https://virtualwhiteboard.com/session/abc"
        );
    }

    #[test]
    fn inserts_missing_separator() {
        assert_eq!(
            session_url("http://localhost:8080/s", "room-1"),
            "http://localhost:8080/s/room-1"
        );
    }
}
