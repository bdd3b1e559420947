//! Client configuration.
//!
//! All configuration is loaded from environment variables with sensible
//! local-development defaults, so the client works against a locally
//! running API with no setup.

use std::time::Duration;

use crate::error::ClientError;

/// How to reach the EpiWatch API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every relative path is resolved against.
    pub base_url: String,
    /// Per-request timeout. The only transport guard; there are no
    /// retries.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `EPIWATCH_API_URL` -- API base URL (default `http://localhost:8000`)
    /// - `EPIWATCH_TIMEOUT_MS` -- request timeout in milliseconds (default 10000)
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = std::env::var("EPIWATCH_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_owned());

        let timeout_ms: u64 = std::env::var("EPIWATCH_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".to_owned())
            .parse()
            .map_err(|e| ClientError::Config(format!("invalid EPIWATCH_TIMEOUT_MS: {e}")))?;

        Ok(Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Configuration pointing at an explicit base URL, keeping the
    /// default timeout. Used by tests against in-process servers.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(10_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_url_keeps_default_timeout() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:9000");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn default_values_parse() {
        // Verify the fallback literals used in from_env.
        let timeout_default: u64 = "10000".parse().unwrap_or(0);
        assert_eq!(timeout_default, 10_000);
    }
}
