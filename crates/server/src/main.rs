//! bourbon-server: loads the tasting table once, then serves recommendations.
//!
//! Startup is fail-fast: if the table cannot be read the process exits
//! before it ever binds a port.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog::Catalog;
use server::{build_router, AppState, RecommendationOrchestrator, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    info!("Starting bourbon-server v{}", env!("CARGO_PKG_VERSION"));

    info!("Loading catalog...");
    let catalog = Arc::new(
        Catalog::load_from_file(&config.data_file, config.header_mode()).with_context(|| {
            format!(
                "Failed to load bourbon catalog from {}",
                config.data_file.display()
            )
        })?,
    );

    let orchestrator = RecommendationOrchestrator::new(catalog, config.strategy);
    info!("Scoring with {} ({})", orchestrator.strategy_name(), config.strategy);

    let app = build_router(AppState::new(orchestrator));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Server running on http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
