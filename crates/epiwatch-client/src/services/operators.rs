//! Health operator registry operations.

use epiwatch_types::{AdminStatus, HealthOperator, OperationStatus, OperatorId, OperatorRegistration};

use crate::error::ClientError;
use crate::http::ApiClient;

/// Verification-status filter for the operator list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperatorStatusFilter {
    /// Everyone.
    #[default]
    All,
    /// Awaiting admin review.
    Pending,
    /// Already verified.
    Verified,
}

impl OperatorStatusFilter {
    pub(crate) fn to_query(self) -> Vec<(&'static str, String)> {
        match self {
            Self::All => Vec::new(),
            Self::Pending => vec![("status", "pending".to_owned())],
            Self::Verified => vec![("status", "verified".to_owned())],
        }
    }

    pub(crate) const fn cache_segment(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Verified => "verified",
        }
    }
}

/// Operator resource service.
#[derive(Debug, Clone)]
pub struct OperatorService {
    api: ApiClient,
}

impl OperatorService {
    /// Wrap a client.
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List registered operators.
    pub async fn list(
        &self,
        filter: OperatorStatusFilter,
    ) -> Result<Vec<HealthOperator>, ClientError> {
        self.api.get("/api/operators", &filter.to_query()).await
    }

    /// Submit a registration. The operator starts unverified.
    pub async fn register(
        &self,
        payload: &OperatorRegistration,
    ) -> Result<OperationStatus, ClientError> {
        self.api.post("/api/operators/register", payload).await
    }

    /// Approve a pending registration.
    pub async fn approve(&self, id: OperatorId) -> Result<OperationStatus, ClientError> {
        self.api.post_empty(&format!("/api/operators/{id}/approve")).await
    }

    /// Reject and remove a pending registration.
    pub async fn reject(&self, id: OperatorId) -> Result<OperationStatus, ClientError> {
        self.api.post_empty(&format!("/api/operators/{id}/reject")).await
    }

    /// Whether an email belongs to an administrator.
    pub async fn check_admin(&self, email: &str) -> Result<AdminStatus, ClientError> {
        self.api
            .get("/api/operators/check-admin", &[("email", email.to_owned())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_query() {
        assert!(OperatorStatusFilter::All.to_query().is_empty());
        assert_eq!(
            OperatorStatusFilter::Pending.to_query(),
            vec![("status", "pending".to_owned())]
        );
        assert_eq!(OperatorStatusFilter::Verified.cache_segment(), "verified");
    }
}
