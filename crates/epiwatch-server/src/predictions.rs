//! Outbreak prediction endpoints.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/predictions/county/{code}` | Predictions for one county |
//! | `POST` | `/api/predictions/generate` | Run a custom prediction |
//! | `GET` | `/api/predictions/national-summary` | Country-wide summary |
//!
//! There is no live model; bundled predictions come from the demo
//! dataset and generated ones are derived deterministically from the
//! county's risk profile.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use chrono::{Days, Utc};
use epiwatch_data::{active_alerts, county_stats};
use epiwatch_types::{
    GenerateRequest, NationalSummary, Prediction, PredictionBundle, RiskLevel, SummaryAlert, Trend,
};
use validator::Validate;

use crate::counties::find_county;
use crate::error::ApiError;
use crate::state::AppState;

/// Model identifier stamped onto every bundle.
const MODEL_VERSION: &str = "epiwatch-demo-1";

/// Default forecast horizon for generated predictions.
const DEFAULT_FORECAST_DAYS: u16 = 14;

/// Query parameters for the per-county endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct PredictionsQuery {
    /// Restrict to one disease.
    pub disease: Option<String>,
}

/// Bundled predictions for one county.
pub async fn for_county(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Query(params): Query<PredictionsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let county = find_county(&state, &code)?;
    let predictions: Vec<Prediction> = state
        .data
        .predictions_for_county(&county.name)
        .into_iter()
        .filter(|p| {
            params
                .disease
                .as_deref()
                .is_none_or(|d| p.disease.eq_ignore_ascii_case(d))
        })
        .cloned()
        .collect();

    Ok(Json(PredictionBundle {
        predictions,
        generated_at: Utc::now(),
        model_version: MODEL_VERSION.to_owned(),
    }))
}

/// Run a custom prediction for a county.
///
/// The output is a pure function of the county's risk profile and the
/// requested horizon, so repeated runs agree.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;
    let county = find_county(&state, &payload.county_code)?;

    let disease = payload
        .disease
        .clone()
        .or_else(|| county.primary_disease.clone())
        .unwrap_or_else(|| "Malaria".to_owned());
    let forecast_days = payload.forecast_days.unwrap_or(DEFAULT_FORECAST_DAYS);

    let stats = county_stats(&county);
    let low = stats.active_cases;
    let high = low.saturating_mul(3).saturating_div(2);
    let peak_date = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(u64::from(forecast_days)))
        .unwrap_or_else(|| Utc::now().date_naive());

    let prediction = Prediction {
        county: county.name,
        disease,
        risk: county.risk,
        confidence: 60_u8.saturating_add(county.risk.checked_rem(30).unwrap_or(0)),
        peak_date,
        estimated_cases: format!("{low}-{high}"),
        trend: if county.risk >= 50 { Trend::Up } else { Trend::Stable },
        trend_value: i8::try_from(county.risk.checked_rem(10).unwrap_or(0)).unwrap_or(0),
    };

    tracing::info!(county = %prediction.county, disease = %prediction.disease, "prediction generated");

    Ok(Json(PredictionBundle {
        predictions: vec![prediction],
        generated_at: Utc::now(),
        model_version: MODEL_VERSION.to_owned(),
    }))
}

/// Country-wide dashboard summary.
pub async fn national_summary(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let counties = state.data.counties();
    let high_risk = state.data.high_risk_counties();

    // Overall tier from the mean of the five riskiest counties.
    let mut risks: Vec<u8> = counties.iter().map(|c| c.risk).collect();
    risks.sort_unstable_by(|a, b| b.cmp(a));
    let top: Vec<u32> = risks.iter().take(5).map(|r| u32::from(*r)).collect();
    let mean = top
        .iter()
        .copied()
        .sum::<u32>()
        .checked_div(u32::try_from(top.len().max(1)).unwrap_or(1))
        .unwrap_or(0);
    let overall_risk = RiskLevel::classify(u8::try_from(mean).unwrap_or(u8::MAX));

    let alerts_store = state.alerts.read().await;
    let active = active_alerts(&alerts_store);

    let alerts: Vec<SummaryAlert> = state
        .data
        .predictions()
        .iter()
        .take(3)
        .map(|p| SummaryAlert {
            county: p.county.clone(),
            disease: p.disease.clone(),
            risk_score: p.risk,
            message: format!("{} outbreak predicted in {}", p.disease, p.county),
        })
        .collect();

    Ok(Json(NationalSummary {
        overall_risk,
        high_risk_counties: u32::try_from(high_risk.len()).unwrap_or(0),
        counties_monitored: u32::try_from(counties.len()).unwrap_or(0),
        active_outbreaks: u32::try_from(active.len()).unwrap_or(0),
        predictions_generated_today: u32::try_from(state.data.predictions().len()).unwrap_or(0),
        model_accuracy: 87,
        alerts,
        last_updated: Utc::now(),
    }))
}
