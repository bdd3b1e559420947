//! County surveillance operations.

use epiwatch_types::{CountyDetail, CountyHistory, CountyListResponse, RiskLevel};

use crate::error::ClientError;
use crate::http::ApiClient;

/// Filters for the county list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountyFilter {
    /// Restrict to one administrative region.
    pub region: Option<String>,
    /// Restrict to counties at one risk tier.
    pub risk_level: Option<RiskLevel>,
}

impl CountyFilter {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(region) = &self.region {
            query.push(("region", region.clone()));
        }
        if let Some(level) = self.risk_level {
            query.push(("risk_level", level.as_str().to_owned()));
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

/// County resource service.
#[derive(Debug, Clone)]
pub struct CountyService {
    api: ApiClient,
}

impl CountyService {
    /// Wrap a client.
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List county statistics, highest risk first.
    pub async fn list(&self, filter: &CountyFilter) -> Result<CountyListResponse, ClientError> {
        self.api.get("/api/counties", &filter.to_query()).await
    }

    /// Fetch one county with its current statistics.
    pub async fn get(&self, code: &str) -> Result<CountyDetail, ClientError> {
        self.api.get(&format!("/api/counties/{code}"), &[]).await
    }

    /// Fetch a county's daily case history over the last `days` days.
    ///
    /// Nairobi with `days = 7` hits `/api/counties/047/history?days=7`.
    pub async fn history(&self, code: &str, days: u16) -> Result<CountyHistory, ClientError> {
        self.api
            .get(
                &format!("/api/counties/{code}/history"),
                &[("days", days.to_string())],
            )
            .await
    }
}
