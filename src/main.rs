use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use whiteboard_service::{create_router, server, AppState, Config, NatsClient, SessionStore};

#[derive(Parser)]
#[command(name = "whiteboard-service", about = "Whiteboard session note service", version)]
struct Cli {
    /// Path to config file (extension optional, missing file uses defaults)
    #[arg(short, long, default_value = "config/whiteboard")]
    config: String,

    /// Override the HTTP port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut cfg = Config::load(&cli.config)?;
    if let Some(port) = cli.port {
        cfg.service.http.port = port;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Session URLs use base {}", cfg.whiteboard.session_base_url);

    let store = Arc::new(SessionStore::new(cfg.whiteboard.session_base_url.clone()));
    let mut state = AppState::new(store);

    if let Some(nats) = &cfg.nats {
        let client = NatsClient::connect(&nats.url, nats.subject_prefix.clone()).await?;
        state = state.with_events(Arc::new(client));
        info!("Note events will be published under {}", nats.subject_prefix);
    }

    let addr = cfg.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Whiteboard service started, listening on {}", addr);

    server::serve(
        listener,
        create_router(state),
        server::shutdown_signal(),
        Duration::from_secs(cfg.service.shutdown_grace_secs),
    )
    .await
}
