// SIGTERM handling lives in its own test binary: the signal is sent to
// the whole test process.

#![cfg(unix)]

use anyhow::Result;
use std::process::Command;
use std::time::Duration;
use whiteboard_service::server;

#[tokio::test]
async fn test_sigterm_triggers_shutdown() -> Result<()> {
    // Handler is installed here, before the signal is sent
    let signal = server::shutdown_signal();

    let status = Command::new("kill")
        .args(["-TERM", &std::process::id().to_string()])
        .status()?;
    assert!(status.success());

    tokio::time::timeout(Duration::from_secs(5), signal).await?;

    Ok(())
}
