//! Early-warning insight endpoints.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/insights/harvest` | Synthesize a harvest run |
//! | `GET` | `/api/insights` | List, newest first |
//! | `GET` | `/api/insights/{id}` | Single insight |
//! | `POST` | `/api/insights/upload` | Upload a PDF health report |
//! | `POST` | `/api/insights/{id}/verify` | Record an operator verdict |
//!
//! Harvesting is simulated: each run synthesizes a handful of pending
//! insights from the demo dataset's counties and diseases.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use epiwatch_data::extract_county;
use epiwatch_types::{
    HarvestRequest, HarvestResponse, Insight, InsightId, InsightListResponse, InsightStatus,
    UploadResponse, VerifyRequest, VerifyResponse,
};
use rand::Rng;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Platforms a harvest run pretends to scrape.
const SOURCES: &[&str] = &["x", "facebook", "community_radio", "news"];

/// Report templates filled in per synthesized insight.
const TEMPLATES: &[&str] = &[
    "Multiple reports of {disease} symptoms from {county} residents this week",
    "Clinic queues growing in {county}, staff mention suspected {disease} cases",
    "Parents keeping children home in {county} over {disease} fears",
    "Pharmacies in {county} report unusual demand for {disease} medication",
];

/// Query parameters for `GET /api/insights`.
#[derive(Debug, serde::Deserialize)]
pub struct InsightsQuery {
    /// Filter by lifecycle status.
    pub status: Option<InsightStatus>,
    /// Filter by county.
    pub county: Option<String>,
    /// Maximum number returned (default 50).
    pub limit: Option<usize>,
}

/// Synthesize a harvest run of 3-8 pending insights.
pub async fn harvest(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<HarvestRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let counties: Vec<String> = payload.counties.unwrap_or_else(|| {
        state
            .data
            .high_risk_counties()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    });
    let diseases: Vec<String> = payload.diseases.unwrap_or_else(|| {
        state.data.diseases().iter().map(|d| d.name.clone()).collect()
    });
    if counties.is_empty() || diseases.is_empty() {
        return Err(ApiError::BadRequest(
            "harvest needs at least one county and one disease".to_owned(),
        ));
    }

    let harvested_at = Utc::now();

    // ThreadRng is !Send; scope it so the future stays Send across awaits.
    let produced = {
        let mut rng = rand::rng();
        let count = rng.random_range(3..=8);

        let mut produced = Vec::with_capacity(count);
        for _ in 0..count {
            let county = pick(&mut rng, &counties).to_owned();
            let disease = pick(&mut rng, &diseases).to_owned();
            let template = pick_str(&mut rng, TEMPLATES);
            let content = template
                .replace("{disease}", &disease.to_lowercase())
                .replace("{county}", &county);

            produced.push(Insight {
                id: InsightId::new(),
                source: pick_str(&mut rng, SOURCES).to_owned(),
                content,
                county,
                disease_indicators: vec![disease],
                severity_score: rng.random_range(20..=90),
                status: InsightStatus::Pending,
                harvested_at,
            });
        }
        produced
    };

    let mut insights = state.insights.write().await;
    insights.extend(produced.clone());
    tracing::info!(count = produced.len(), "harvest run complete");

    Ok(Json(HarvestResponse {
        success: true,
        insights_count: produced.len(),
        insights: produced,
        harvested_at,
    }))
}

/// List insights, newest first.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<InsightsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let insights = state.insights.read().await;
    let mut matching: Vec<Insight> = insights
        .iter()
        .filter(|i| params.status.is_none_or(|s| i.status == s))
        .filter(|i| {
            params
                .county
                .as_deref()
                .is_none_or(|c| i.county.eq_ignore_ascii_case(c))
        })
        .cloned()
        .collect();
    matching.sort_by(|a, b| b.harvested_at.cmp(&a.harvested_at));
    matching.truncate(params.limit.unwrap_or(50));

    let count = matching.len();
    Ok(Json(InsightListResponse {
        count,
        insights: matching,
    }))
}

/// Single insight by ID.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let insights = state.insights.read().await;
    insights
        .iter()
        .find(|i| i.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Insight {id} not found")))
}

/// Accept a PDF health report upload and create an analyzed insight
/// from it.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut filename = None;
    let mut bytes: Vec<u8> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed upload: {e}")))?
    {
        if field.name() == Some("file") {
            filename = field.file_name().map(ToOwned::to_owned);
            bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("unreadable upload: {e}")))?
                .to_vec();
        }
    }

    let filename = filename.ok_or_else(|| {
        ApiError::BadRequest("upload requires a 'file' part with a filename".to_owned())
    })?;
    if bytes.is_empty() {
        return Err(ApiError::BadRequest("uploaded file is empty".to_owned()));
    }

    let lower = filename.to_lowercase();
    let disease_indicators: Vec<String> = state
        .data
        .diseases()
        .iter()
        .filter(|d| lower.contains(&d.name.to_lowercase()))
        .map(|d| d.name.clone())
        .collect();
    let county = extract_county(&filename).unwrap_or_else(|| "Unknown".to_owned());

    // Severity scales with how much the report flags, bounded 40-90.
    let severity_score = 40_u8
        .saturating_add(u8::try_from(disease_indicators.len().saturating_mul(15)).unwrap_or(50))
        .min(90);

    let insight = Insight {
        id: InsightId::new(),
        source: "pdf_upload".to_owned(),
        content: format!(
            "Uploaded health report '{filename}' ({} bytes) processed",
            bytes.len()
        ),
        county,
        disease_indicators: disease_indicators.clone(),
        severity_score,
        status: InsightStatus::Analyzed,
        harvested_at: Utc::now(),
    };

    let response = UploadResponse {
        success: true,
        filename,
        insight_id: insight.id,
        extracted_summary: insight.content.clone(),
        disease_indicators,
        severity_score,
        status: InsightStatus::Analyzed,
        message: "Report analyzed and queued for operator review".to_owned(),
    };

    state.insights.write().await.push(insight);
    tracing::info!(filename = %response.filename, "report uploaded");

    Ok((StatusCode::CREATED, Json(response)))
}

/// Record an operator verdict: approved insights become verified,
/// others rejected.
pub async fn verify(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<VerifyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let mut insights = state.insights.write().await;
    let insight = insights
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("Insight {id} not found")))?;

    let new_status = if payload.approved {
        InsightStatus::Verified
    } else {
        InsightStatus::Rejected
    };
    insight.status = new_status;
    tracing::info!(%id, status = ?new_status, "insight verdict recorded");

    Ok(Json(VerifyResponse {
        success: true,
        new_status,
    }))
}

/// Pick a random element of a non-empty string slice.
fn pick<'a, R: Rng>(rng: &mut R, pool: &'a [String]) -> &'a str {
    let idx = rng.random_range(0..pool.len());
    pool.get(idx).map_or("", String::as_str)
}

/// Pick a random element of a non-empty `&str` slice.
fn pick_str<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    let idx = rng.random_range(0..pool.len());
    pool.get(idx).copied().unwrap_or("")
}

/// Parse an insight ID from the request path.
fn parse_id(s: &str) -> Result<InsightId, ApiError> {
    s.parse::<Uuid>()
        .map(InsightId::from)
        .map_err(|e| ApiError::BadRequest(format!("invalid insight id '{s}': {e}")))
}
