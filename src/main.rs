//! Scholar Gateway server entry point.

use anyhow::{Context, Result};
use clap::Parser;
use scholar_gateway::{
    config::{self, Settings},
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Academic paper search gateway backed by Semantic Scholar
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to settings.yml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server port (overrides settings and environment)
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address (overrides settings and environment)
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting Scholar Gateway v{}", scholar_gateway::VERSION);

    let settings = load_settings(&cli)?;
    info!(
        "Provider: {} (api key: {})",
        settings.provider.api_url,
        if settings.provider.api_key.is_some() { "yes" } else { "no" }
    );

    let addr = SocketAddr::new(
        settings
            .server
            .bind_address
            .parse()
            .with_context(|| format!("invalid bind address {:?}", settings.server.bind_address))?,
        settings.server.port,
    );

    let state = AppState::new(settings)?;
    info!("Application state initialized");

    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Load settings and apply command-line overrides
fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = config::load(cli.config.as_deref())?;

    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(ref bind) = cli.bind {
        settings.server.bind_address = bind.clone();
    }

    settings.validate()?;
    Ok(settings)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
