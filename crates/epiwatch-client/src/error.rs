//! Client error type.
//!
//! Everything the data-access layer can fail with is normalized into
//! [`ClientError`]; callers never see raw transport errors. API errors
//! carry the `detail` message the server put in the JSON error body, so
//! `error.to_string()` on a 404 reads exactly like the server's
//! explanation.

use epiwatch_cache::CacheError;
use thiserror::Error;

/// All errors the EpiWatch client can produce.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("{detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// `detail` field of the error body, or `HTTP <status>` when the
        /// body had none.
        detail: String,
    },

    /// The request never produced a response (connect failure, timeout,
    /// malformed URL).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body could not be decoded into the expected type.
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The query cache failed to round-trip a stored value.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Configuration was invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// The HTTP status code, when the server produced one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a 404 from the server.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
