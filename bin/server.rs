// Receipt Processor - Web Server

use anyhow::{Context, Result};
use clap::Parser;
use receipt_processor::config::ServerConfig;
use receipt_processor::server::{router, AppState};
use receipt_processor::{logging, ReceiptProcessor};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    logging::init(config.log_format, &config.log_level)?;

    let state = AppState::new(ReceiptProcessor::default());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        version = receipt_processor::VERSION,
        addr = %config.bind,
        "Receipt server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Receipt server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
