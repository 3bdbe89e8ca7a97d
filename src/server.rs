//! Serving with bounded graceful shutdown

use anyhow::{Context, Result};
use axum::Router;
use std::future::Future;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves, then drain.
///
/// After the signal no new connections are accepted; in-flight requests get
/// `grace` to finish before the server task is aborted.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F, grace: Duration) -> Result<()>
where
    F: Future<Output = ()>,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                stop_rx.await.ok();
            })
            .await
    });

    tokio::select! {
        // Server exited on its own (bind/accept failure)
        res = &mut server => {
            return res.context("Server task panicked")?.context("Server error");
        }
        _ = shutdown => {
            info!("Shutdown signal received, draining in-flight requests (grace {:?})", grace);
        }
    }

    stop_tx.send(()).ok();

    match tokio::time::timeout(grace, &mut server).await {
        Ok(res) => {
            res.context("Server task panicked")?.context("Server error")?;
            info!("Server shut down");
        }
        Err(_) => {
            warn!("Grace period elapsed, forcing server stop");
            server.abort();
        }
    }

    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where available.
///
/// The SIGTERM handler is installed when this is called, not when the
/// returned future is first polled, so a terminate sent right after startup
/// still drains. Must be called inside a Tokio runtime.
pub fn shutdown_signal() -> impl Future<Output = ()> {
    #[cfg(unix)]
    let terminate = match signal(SignalKind::terminate()) {
        Ok(sigterm) => Some(sigterm),
        Err(e) => {
            warn!("Failed to register SIGTERM handler: {}", e);
            None
        }
    };

    async move {
        #[cfg(unix)]
        {
            let mut terminate = terminate;
            tokio::select! {
                _ = interrupted() => info!("Received SIGINT"),
                _ = terminated(terminate.as_mut()) => info!("Received SIGTERM"),
            }
        }

        #[cfg(not(unix))]
        {
            interrupted().await;
            info!("Received Ctrl-C");
        }
    }
}

async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminated(sigterm: Option<&mut Signal>) {
    match sigterm {
        Some(sigterm) => {
            sigterm.recv().await;
        }
        None => std::future::pending::<()>().await,
    }
}
