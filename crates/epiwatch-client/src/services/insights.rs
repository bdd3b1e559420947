//! Early-warning insight operations.

use epiwatch_types::{
    HarvestRequest, HarvestResponse, Insight, InsightId, InsightListResponse, InsightStatus,
    UploadResponse, VerifyRequest, VerifyResponse,
};
use reqwest::multipart;

use crate::error::ClientError;
use crate::http::ApiClient;

/// Filters for the insight list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightFilter {
    /// Restrict to one lifecycle status.
    pub status: Option<InsightStatus>,
    /// Restrict to one county.
    pub county: Option<String>,
    /// Maximum number of insights to return.
    pub limit: Option<u32>,
}

impl InsightFilter {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status
            && let Ok(v) = serde_json::to_value(status)
            && let Some(s) = v.as_str()
        {
            query.push(("status", s.to_owned()));
        }
        if let Some(county) = &self.county {
            query.push(("county", county.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }

    pub(crate) fn cache_segment(&self) -> String {
        self.to_query()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Insight resource service.
#[derive(Debug, Clone)]
pub struct InsightService {
    api: ApiClient,
}

impl InsightService {
    /// Wrap a client.
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Trigger a social-media harvest run.
    pub async fn harvest(&self, request: &HarvestRequest) -> Result<HarvestResponse, ClientError> {
        self.api.post("/api/insights/harvest", request).await
    }

    /// List insights, newest first.
    pub async fn list(&self, filter: &InsightFilter) -> Result<InsightListResponse, ClientError> {
        self.api.get("/api/insights", &filter.to_query()).await
    }

    /// Fetch one insight by ID.
    pub async fn get(&self, id: InsightId) -> Result<Insight, ClientError> {
        self.api.get(&format!("/api/insights/{id}"), &[]).await
    }

    /// Upload a PDF health report for extraction.
    pub async fn upload(
        &self,
        filename: &str,
        pdf_bytes: Vec<u8>,
    ) -> Result<UploadResponse, ClientError> {
        let part = multipart::Part::bytes(pdf_bytes)
            .file_name(filename.to_owned())
            .mime_str("application/pdf")?;
        let form = multipart::Form::new().part("file", part);
        self.api.post_multipart("/api/insights/upload", form).await
    }

    /// Record an operator verdict on an insight.
    pub async fn verify(
        &self,
        id: InsightId,
        approved: bool,
    ) -> Result<VerifyResponse, ClientError> {
        self.api
            .post(&format!("/api/insights/{id}/verify"), &VerifyRequest { approved })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_query_serializes_status_lowercase() {
        let filter = InsightFilter {
            status: Some(InsightStatus::Pending),
            county: Some("Nairobi".to_owned()),
            limit: Some(10),
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("status", "pending".to_owned()),
                ("county", "Nairobi".to_owned()),
                ("limit", "10".to_owned()),
            ]
        );
        assert_eq!(filter.cache_segment(), "status=pending&county=Nairobi&limit=10");
    }
}
