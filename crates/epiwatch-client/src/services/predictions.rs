//! Outbreak prediction operations.

use epiwatch_types::{GenerateRequest, NationalSummary, PredictionBundle};

use crate::error::ClientError;
use crate::http::ApiClient;

/// Prediction resource service.
#[derive(Debug, Clone)]
pub struct PredictionService {
    api: ApiClient,
}

impl PredictionService {
    /// Wrap a client.
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Predictions for one county, optionally narrowed to a disease.
    pub async fn for_county(
        &self,
        code: &str,
        disease: Option<&str>,
    ) -> Result<PredictionBundle, ClientError> {
        let mut query = Vec::new();
        if let Some(disease) = disease {
            query.push(("disease", disease.to_owned()));
        }
        self.api
            .get(&format!("/api/predictions/county/{code}"), &query)
            .await
    }

    /// Run a custom prediction for a county.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<PredictionBundle, ClientError> {
        self.api.post("/api/predictions/generate", request).await
    }

    /// The country-wide dashboard summary.
    pub async fn national_summary(&self) -> Result<NationalSummary, ClientError> {
        self.api.get("/api/predictions/national-summary", &[]).await
    }
}
