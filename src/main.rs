use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pipeline_analyzer::config::Config;
use pipeline_analyzer::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter)
                .with_context(|| format!("Invalid log filter '{}'", config.log_filter))?,
        )
        .init();

    let cors = config.cors_layer()?;
    let app = server::router(AppState::default(), cors);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!(
        allowed_origins = ?config.allowed_origins,
        "Pipeline analyzer listening on {}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Pipeline analyzer stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
