//! HTTP server lifecycle.
//!
//! [`start_server`] binds the configured address and serves the router
//! until the process is terminated.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Network configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `EPIWATCH_HOST` -- bind address (default `0.0.0.0`)
    /// - `EPIWATCH_PORT` -- TCP port (default 8000)
    pub fn from_env() -> Result<Self, ServerError> {
        let host = std::env::var("EPIWATCH_HOST").unwrap_or_else(|_| "0.0.0.0".to_owned());
        let port: u16 = std::env::var("EPIWATCH_PORT")
            .unwrap_or_else(|_| "8000".to_owned())
            .parse()
            .map_err(|e| ServerError::Config(format!("invalid EPIWATCH_PORT: {e}")))?;
        Ok(Self { host, port })
    }
}

/// Bind and serve until terminated.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "EpiWatch API listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    Ok(())
}

/// Errors starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration was invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to bind the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// Fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_binds_port_8000() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }
}
