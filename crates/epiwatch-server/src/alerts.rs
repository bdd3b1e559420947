//! Outbreak alert endpoints.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/alerts` | List alerts (optionally only unhandled) |
//! | `POST` | `/api/alerts/{id}/handle` | Mark an alert handled |
//! | `GET` | `/api/alerts/timeline` | The 14-day outbreak timeline |
//!
//! Handled flags live in the server's in-memory store, so every
//! dashboard sees the same alert state.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use epiwatch_data::active_alerts;
use epiwatch_types::{Alert, AlertId, OperationStatus};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for `GET /api/alerts`.
#[derive(Debug, serde::Deserialize)]
pub struct AlertsQuery {
    /// When `true`, only alerts not yet handled.
    pub active: Option<bool>,
}

/// List alerts.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AlertsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let alerts = state.alerts.read().await;
    let listed: Vec<Alert> = if params.active.unwrap_or(false) {
        active_alerts(&alerts).into_iter().cloned().collect()
    } else {
        alerts.clone()
    };
    Ok(Json(listed))
}

/// Mark one alert handled. Idempotent.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let mut alerts = state.alerts.write().await;
    let alert = alerts
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("Alert {id} not found")))?;

    alert.handled = true;
    tracing::info!(title = %alert.title, "alert marked handled");

    Ok(Json(OperationStatus {
        success: true,
        message: format!("Alert '{}' marked handled", alert.title),
    }))
}

/// The 14-day outbreak timeline.
pub async fn timeline(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.data.timeline().to_vec())
}

/// Parse an alert ID from the request path.
fn parse_id(s: &str) -> Result<AlertId, ApiError> {
    s.parse::<Uuid>()
        .map(AlertId::from)
        .map_err(|e| ApiError::BadRequest(format!("invalid alert id '{s}': {e}")))
}
