//! Cached query layer.
//!
//! [`Queries`] binds the resource services to a shared [`QueryCache`]:
//! every read is registered under a hierarchical key with its domain's
//! stale time, and every mutation invalidates its domain prefix after
//! the server confirms it. Failed mutations invalidate nothing.
//!
//! Stale times per domain: diseases 5 min, counties 2 min, predictions
//! 10 min, national summary 5 min with a 60 s live poller on top,
//! operators and insights 2 min, alerts 1 min.

use std::time::Duration;

use epiwatch_cache::{CachePolicy, QueryCache, QueryKey};
use epiwatch_types::{
    Alert, AlertId, CountyDetail, CountyHistory, CountyListResponse, Disease, DiseaseCreate,
    DiseaseId, DiseaseListResponse, DiseaseUpdate, GenerateRequest, HarvestRequest,
    HarvestResponse, HealthOperator, Insight, InsightId, InsightListResponse, NationalSummary,
    OperationStatus, OperatorId, OperatorRegistration, PredictionBundle, TimelineEntry,
    UploadResponse, VerifyResponse,
};
use tokio::task::JoinHandle;

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::services::{
    AlertService, CountyFilter, CountyService, DiseaseFilter, DiseaseService, InsightFilter,
    InsightService, OperatorService, OperatorStatusFilter, PredictionService,
};

const DISEASES_STALE: CachePolicy = CachePolicy::new(Duration::from_secs(300));
const COUNTIES_STALE: CachePolicy = CachePolicy::new(Duration::from_secs(120));
const PREDICTIONS_STALE: CachePolicy = CachePolicy::new(Duration::from_secs(600));
const SUMMARY_STALE: CachePolicy = CachePolicy::new(Duration::from_secs(300));
const OPERATORS_STALE: CachePolicy = CachePolicy::new(Duration::from_secs(120));
const INSIGHTS_STALE: CachePolicy = CachePolicy::new(Duration::from_secs(120));
const ALERTS_STALE: CachePolicy = CachePolicy::new(Duration::from_secs(60));

/// How often the live national summary is refreshed by the poller.
pub const SUMMARY_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Cached, typed access to every read and mutation of the API.
#[derive(Debug, Clone)]
pub struct Queries {
    api: ApiClient,
    cache: QueryCache,
}

impl Queries {
    /// Bind a client to a fresh cache.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cache: QueryCache::new(),
        }
    }

    /// Bind a client to an existing (possibly shared) cache.
    pub const fn with_cache(api: ApiClient, cache: QueryCache) -> Self {
        Self { api, cache }
    }

    /// The underlying cache.
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Key the live national summary is stored under.
    pub fn summary_key() -> QueryKey {
        QueryKey::new(["predictions", "summary"])
    }

    // -----------------------------------------------------------------------
    // Diseases
    // -----------------------------------------------------------------------

    /// List diseases (cached 5 min per filter).
    pub async fn diseases(&self, filter: &DiseaseFilter) -> Result<DiseaseListResponse, ClientError> {
        let key = QueryKey::domain("diseases").push("list").push(filter.cache_segment());
        let service = DiseaseService::new(self.api.clone());
        let filter = filter.clone();
        self.cache
            .get_with(&key, DISEASES_STALE, move || async move {
                service.list(&filter).await
            })
            .await
    }

    /// One disease by ID (cached 5 min).
    pub async fn disease(&self, id: DiseaseId) -> Result<Disease, ClientError> {
        let key = QueryKey::domain("diseases").push("detail").push(id.to_string());
        let service = DiseaseService::new(self.api.clone());
        self.cache
            .get_with(&key, DISEASES_STALE, move || async move { service.get(id).await })
            .await
    }

    /// Create a disease and invalidate the disease domain.
    pub async fn create_disease(&self, payload: &DiseaseCreate) -> Result<Disease, ClientError> {
        let created = DiseaseService::new(self.api.clone()).create(payload).await?;
        self.cache.invalidate_prefix(&QueryKey::domain("diseases")).await;
        Ok(created)
    }

    /// Update a disease and invalidate the disease domain.
    pub async fn update_disease(
        &self,
        id: DiseaseId,
        payload: &DiseaseUpdate,
    ) -> Result<Disease, ClientError> {
        let updated = DiseaseService::new(self.api.clone()).update(id, payload).await?;
        self.cache.invalidate_prefix(&QueryKey::domain("diseases")).await;
        Ok(updated)
    }

    /// Delete a disease and invalidate the disease domain.
    pub async fn delete_disease(&self, id: DiseaseId) -> Result<(), ClientError> {
        DiseaseService::new(self.api.clone()).delete(id).await?;
        self.cache.invalidate_prefix(&QueryKey::domain("diseases")).await;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Counties
    // -----------------------------------------------------------------------

    /// County statistics list (cached 2 min per filter).
    pub async fn counties(&self, filter: &CountyFilter) -> Result<CountyListResponse, ClientError> {
        let key = QueryKey::domain("counties").push("list").push(filter.cache_segment());
        let service = CountyService::new(self.api.clone());
        let filter = filter.clone();
        self.cache
            .get_with(&key, COUNTIES_STALE, move || async move {
                service.list(&filter).await
            })
            .await
    }

    /// One county's detail (cached 2 min).
    pub async fn county(&self, code: &str) -> Result<CountyDetail, ClientError> {
        let key = QueryKey::domain("counties").push("detail").push(code);
        let service = CountyService::new(self.api.clone());
        let code = code.to_owned();
        self.cache
            .get_with(&key, COUNTIES_STALE, move || async move {
                service.get(&code).await
            })
            .await
    }

    /// One county's case history (cached 2 min per window).
    pub async fn county_history(&self, code: &str, days: u16) -> Result<CountyHistory, ClientError> {
        let key = QueryKey::domain("counties")
            .push("history")
            .push(code)
            .push(days.to_string());
        let service = CountyService::new(self.api.clone());
        let code = code.to_owned();
        self.cache
            .get_with(&key, COUNTIES_STALE, move || async move {
                service.history(&code, days).await
            })
            .await
    }

    // -----------------------------------------------------------------------
    // Predictions
    // -----------------------------------------------------------------------

    /// Predictions for a county (cached 10 min per county/disease).
    pub async fn predictions_for_county(
        &self,
        code: &str,
        disease: Option<&str>,
    ) -> Result<PredictionBundle, ClientError> {
        let key = QueryKey::domain("predictions")
            .push("county")
            .push(code)
            .push(disease.unwrap_or(""));
        let service = PredictionService::new(self.api.clone());
        let code = code.to_owned();
        let disease = disease.map(ToOwned::to_owned);
        self.cache
            .get_with(&key, PREDICTIONS_STALE, move || async move {
                service.for_county(&code, disease.as_deref()).await
            })
            .await
    }

    /// The national summary (cached 5 min; see [`Self::spawn_summary_poller`]).
    pub async fn national_summary(&self) -> Result<NationalSummary, ClientError> {
        let service = PredictionService::new(self.api.clone());
        self.cache
            .get_with(&Self::summary_key(), SUMMARY_STALE, move || async move {
                service.national_summary().await
            })
            .await
    }

    /// Run a custom prediction and invalidate the prediction domain.
    pub async fn generate_prediction(
        &self,
        request: &GenerateRequest,
    ) -> Result<PredictionBundle, ClientError> {
        let bundle = PredictionService::new(self.api.clone()).generate(request).await?;
        self.cache.invalidate_prefix(&QueryKey::domain("predictions")).await;
        Ok(bundle)
    }

    /// Keep the national summary fresh on a 60 s interval, independent
    /// of staleness. Abort the returned handle to stop polling.
    pub fn spawn_summary_poller(&self) -> JoinHandle<()> {
        let api = self.api.clone();
        self.cache.spawn_poller(Self::summary_key(), SUMMARY_POLL_INTERVAL, move || {
            let service = PredictionService::new(api.clone());
            async move { service.national_summary().await }
        })
    }

    // -----------------------------------------------------------------------
    // Operators
    // -----------------------------------------------------------------------

    /// List operators (cached 2 min per status filter).
    pub async fn operators(
        &self,
        filter: OperatorStatusFilter,
    ) -> Result<Vec<HealthOperator>, ClientError> {
        let key = QueryKey::domain("operators").push("list").push(filter.cache_segment());
        let service = OperatorService::new(self.api.clone());
        self.cache
            .get_with(&key, OPERATORS_STALE, move || async move {
                service.list(filter).await
            })
            .await
    }

    /// Register an operator and invalidate the operator domain.
    pub async fn register_operator(
        &self,
        payload: &OperatorRegistration,
    ) -> Result<OperationStatus, ClientError> {
        let status = OperatorService::new(self.api.clone()).register(payload).await?;
        self.cache.invalidate_prefix(&QueryKey::domain("operators")).await;
        Ok(status)
    }

    /// Approve a registration and invalidate the operator domain.
    pub async fn approve_operator(&self, id: OperatorId) -> Result<OperationStatus, ClientError> {
        let status = OperatorService::new(self.api.clone()).approve(id).await?;
        self.cache.invalidate_prefix(&QueryKey::domain("operators")).await;
        Ok(status)
    }

    /// Reject a registration and invalidate the operator domain.
    pub async fn reject_operator(&self, id: OperatorId) -> Result<OperationStatus, ClientError> {
        let status = OperatorService::new(self.api.clone()).reject(id).await?;
        self.cache.invalidate_prefix(&QueryKey::domain("operators")).await;
        Ok(status)
    }

    // -----------------------------------------------------------------------
    // Insights
    // -----------------------------------------------------------------------

    /// List insights (cached 2 min per filter).
    pub async fn insights(&self, filter: &InsightFilter) -> Result<InsightListResponse, ClientError> {
        let key = QueryKey::domain("insights").push("list").push(filter.cache_segment());
        let service = InsightService::new(self.api.clone());
        let filter = filter.clone();
        self.cache
            .get_with(&key, INSIGHTS_STALE, move || async move {
                service.list(&filter).await
            })
            .await
    }

    /// One insight by ID (cached 2 min).
    pub async fn insight(&self, id: InsightId) -> Result<Insight, ClientError> {
        let key = QueryKey::domain("insights").push("detail").push(id.to_string());
        let service = InsightService::new(self.api.clone());
        self.cache
            .get_with(&key, INSIGHTS_STALE, move || async move { service.get(id).await })
            .await
    }

    /// Run a harvest and invalidate the insight domain.
    pub async fn harvest_insights(
        &self,
        request: &HarvestRequest,
    ) -> Result<HarvestResponse, ClientError> {
        let response = InsightService::new(self.api.clone()).harvest(request).await?;
        self.cache.invalidate_prefix(&QueryKey::domain("insights")).await;
        Ok(response)
    }

    /// Upload a PDF report and invalidate the insight domain.
    pub async fn upload_report(
        &self,
        filename: &str,
        pdf_bytes: Vec<u8>,
    ) -> Result<UploadResponse, ClientError> {
        let response = InsightService::new(self.api.clone()).upload(filename, pdf_bytes).await?;
        self.cache.invalidate_prefix(&QueryKey::domain("insights")).await;
        Ok(response)
    }

    /// Record a verdict and invalidate the insight domain.
    pub async fn verify_insight(
        &self,
        id: InsightId,
        approved: bool,
    ) -> Result<VerifyResponse, ClientError> {
        let response = InsightService::new(self.api.clone()).verify(id, approved).await?;
        self.cache.invalidate_prefix(&QueryKey::domain("insights")).await;
        Ok(response)
    }

    // -----------------------------------------------------------------------
    // Alerts
    // -----------------------------------------------------------------------

    /// List alerts (cached 1 min per scope).
    pub async fn alerts(&self, active_only: bool) -> Result<Vec<Alert>, ClientError> {
        let scope = if active_only { "active" } else { "all" };
        let key = QueryKey::domain("alerts").push("list").push(scope);
        let service = AlertService::new(self.api.clone());
        self.cache
            .get_with(&key, ALERTS_STALE, move || async move {
                service.list(active_only).await
            })
            .await
    }

    /// The 14-day outbreak timeline (cached 1 min).
    pub async fn alert_timeline(&self) -> Result<Vec<TimelineEntry>, ClientError> {
        let key = QueryKey::domain("alerts").push("timeline");
        let service = AlertService::new(self.api.clone());
        self.cache
            .get_with(&key, ALERTS_STALE, move || async move {
                service.timeline().await
            })
            .await
    }

    /// Mark an alert handled and invalidate the alert domain.
    pub async fn handle_alert(&self, id: AlertId) -> Result<OperationStatus, ClientError> {
        let status = AlertService::new(self.api.clone()).handle(id).await?;
        self.cache.invalidate_prefix(&QueryKey::domain("alerts")).await;
        Ok(status)
    }
}
