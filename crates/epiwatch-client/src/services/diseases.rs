//! Disease catalogue operations.

use epiwatch_types::{Disease, DiseaseCategory, DiseaseCreate, DiseaseId, DiseaseListResponse, DiseaseUpdate};

use crate::error::ClientError;
use crate::http::ApiClient;

/// Filters for the disease list endpoint. Absent fields produce no
/// query parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseFilter {
    /// Restrict to one epidemiological category.
    pub category: Option<DiseaseCategory>,
    /// Case-insensitive name substring.
    pub search: Option<String>,
    /// Pagination offset.
    pub skip: Option<u32>,
    /// Pagination page size.
    pub limit: Option<u32>,
}

impl DiseaseFilter {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(category) = self.category
            && let Ok(v) = serde_json::to_value(category)
            && let Some(s) = v.as_str()
        {
            query.push(("category", s.to_owned()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(skip) = self.skip {
            query.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }

    /// Stable cache-key segment summarizing this filter.
    pub(crate) fn cache_segment(&self) -> String {
        self.to_query()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Disease resource service.
#[derive(Debug, Clone)]
pub struct DiseaseService {
    api: ApiClient,
}

impl DiseaseService {
    /// Wrap a client.
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List diseases matching the filter.
    pub async fn list(&self, filter: &DiseaseFilter) -> Result<DiseaseListResponse, ClientError> {
        self.api.get("/api/diseases", &filter.to_query()).await
    }

    /// Fetch one disease by ID.
    pub async fn get(&self, id: DiseaseId) -> Result<Disease, ClientError> {
        self.api.get(&format!("/api/diseases/{id}"), &[]).await
    }

    /// Create a disease.
    pub async fn create(&self, payload: &DiseaseCreate) -> Result<Disease, ClientError> {
        self.api.post("/api/diseases", payload).await
    }

    /// Partially update a disease.
    pub async fn update(
        &self,
        id: DiseaseId,
        payload: &DiseaseUpdate,
    ) -> Result<Disease, ClientError> {
        self.api.patch(&format!("/api/diseases/{id}"), payload).await
    }

    /// Delete a disease. The server answers `204 No Content`.
    pub async fn delete(&self, id: DiseaseId) -> Result<(), ClientError> {
        self.api.delete(&format!("/api/diseases/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_builds_no_query() {
        assert!(DiseaseFilter::default().to_query().is_empty());
        assert_eq!(DiseaseFilter::default().cache_segment(), "");
    }

    #[test]
    fn full_filter_serializes_category_snake_case() {
        let filter = DiseaseFilter {
            category: Some(DiseaseCategory::VectorBorne),
            search: Some("mal".to_owned()),
            skip: Some(0),
            limit: Some(20),
        };
        let query = filter.to_query();
        assert!(query.contains(&("category", "vector_borne".to_owned())));
        assert!(query.contains(&("search", "mal".to_owned())));
        assert_eq!(filter.cache_segment(), "category=vector_borne&search=mal&skip=0&limit=20");
    }
}
