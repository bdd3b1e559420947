//! EpiWatch API server entry point.
//!
//! Initializes logging, loads network configuration from the
//! environment, seeds the in-memory state from the demo dataset, and
//! serves until terminated.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use epiwatch_server::{AppState, ServerConfig, start_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("epiwatch-server starting");

    let config = ServerConfig::from_env()?;
    let state = Arc::new(AppState::new());

    start_server(&config, state).await?;

    Ok(())
}
