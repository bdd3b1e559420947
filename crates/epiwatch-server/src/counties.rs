//! County surveillance endpoints.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/counties` | County statistics, highest risk first |
//! | `GET` | `/api/counties/{code}` | Single county with current stats |
//! | `GET` | `/api/counties/{code}/history` | Daily case history |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use epiwatch_data::{MAX_HISTORY_DAYS, MIN_HISTORY_DAYS, county_history, county_stats};
use epiwatch_types::{
    County, CountyDetail, CountyListResponse, CountyRisk, RiskLevel,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for `GET /api/counties`.
#[derive(Debug, serde::Deserialize)]
pub struct CountiesQuery {
    /// Filter by administrative region.
    pub region: Option<String>,
    /// Filter by risk tier (`low` | `medium` | `high` | `critical`).
    pub risk_level: Option<RiskLevel>,
}

/// Query parameters for the history endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct HistoryQuery {
    /// Window length in days (default 30, accepted range 7-365).
    pub days: Option<u16>,
}

/// List per-county statistics, highest risk score first.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountiesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let mut counties: Vec<&CountyRisk> = state
        .data
        .counties()
        .iter()
        .filter(|c| {
            params
                .region
                .as_deref()
                .is_none_or(|r| c.region.eq_ignore_ascii_case(r))
        })
        .filter(|c| {
            params
                .risk_level
                .is_none_or(|level| RiskLevel::classify(c.risk) == level)
        })
        .collect();
    counties.sort_by(|a, b| b.risk.cmp(&a.risk));

    let data: Vec<_> = counties.into_iter().map(county_stats).collect();
    let count = data.len();
    Ok(Json(CountyListResponse { data, count }))
}

/// Single county with its current statistics.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let county = find_county(&state, &code)?;
    let stats = county_stats(&county);
    Ok(Json(CountyDetail {
        county: County {
            code: county.code,
            name: county.name,
            population: county.population,
            region: county.region,
        },
        stats,
    }))
}

/// Daily case history for a county.
pub async fn history(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Query(params): Query<HistoryQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let county = find_county(&state, &code)?;
    let days = params.days.unwrap_or(30);
    if !(MIN_HISTORY_DAYS..=MAX_HISTORY_DAYS).contains(&days) {
        return Err(ApiError::Validation(format!(
            "days must be between {MIN_HISTORY_DAYS} and {MAX_HISTORY_DAYS}"
        )));
    }
    Ok(Json(county_history(&county, days)))
}

/// Resolve a county by its three-digit code.
pub(crate) fn find_county(state: &AppState, code: &str) -> Result<CountyRisk, ApiError> {
    state
        .data
        .county_by_code(code)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("County {code} not found")))
}
