use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use whiteboard_service::Config;

#[test]
fn test_missing_file_uses_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("absent");

    let cfg = Config::load(path.to_str().unwrap())?;
    assert_eq!(cfg.service.name, "whiteboard-service");
    assert_eq!(cfg.service.http.port, 50051);
    assert_eq!(cfg.service.shutdown_grace_secs, 30);
    assert_eq!(
        cfg.whiteboard.session_base_url,
        "https://virtualwhiteboard.com/session/"
    );
    assert!(cfg.nats.is_none());
    assert_eq!(cfg.listen_addr(), "0.0.0.0:50051");

    Ok(())
}

#[test]
fn test_load_toml_overrides() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("whiteboard.toml");
    fs::write(
        &path,
        r#"
[service]
shutdown_grace_secs = 5

[service.http]
bind = "127.0.0.1"
port = 8080

[whiteboard]
session_base_url = "http://localhost:8080/board/"

[nats]
url = "nats://localhost:4222"
"#,
    )?;

    let cfg = Config::load(path.to_str().unwrap())?;
    assert_eq!(cfg.service.name, "whiteboard-service");
    assert_eq!(cfg.service.shutdown_grace_secs, 5);
    assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.whiteboard.session_base_url, "http://localhost:8080/board/");

    let nats = cfg.nats.expect("nats section");
    assert_eq!(nats.url, "nats://localhost:4222");
    assert_eq!(nats.subject_prefix, "whiteboard.note");

    Ok(())
}

#[test]
fn test_malformed_file_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[service\nname = ")?;

    assert!(Config::load(path.to_str().unwrap()).is_err());

    Ok(())
}
