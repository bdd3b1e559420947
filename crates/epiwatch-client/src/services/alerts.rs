//! Outbreak alert operations.

use epiwatch_types::{Alert, AlertId, OperationStatus, TimelineEntry};

use crate::error::ClientError;
use crate::http::ApiClient;

/// Alert resource service.
#[derive(Debug, Clone)]
pub struct AlertService {
    api: ApiClient,
}

impl AlertService {
    /// Wrap a client.
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List alerts. With `active_only`, only alerts not yet handled.
    pub async fn list(&self, active_only: bool) -> Result<Vec<Alert>, ClientError> {
        let query: Vec<(&str, String)> = if active_only {
            vec![("active", "true".to_owned())]
        } else {
            Vec::new()
        };
        self.api.get("/api/alerts", &query).await
    }

    /// Mark an alert handled. Idempotent on the server.
    pub async fn handle(&self, id: AlertId) -> Result<OperationStatus, ClientError> {
        self.api
            .post_empty(&format!("/api/alerts/{id}/handle"))
            .await
    }

    /// Fetch the 14-day outbreak timeline.
    pub async fn timeline(&self) -> Result<Vec<TimelineEntry>, ClientError> {
        self.api.get("/api/alerts/timeline", &[]).await
    }
}
