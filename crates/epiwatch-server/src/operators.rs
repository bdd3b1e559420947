//! Health operator registry endpoints.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/operators` | List registrations |
//! | `POST` | `/api/operators/register` | Submit a registration |
//! | `POST` | `/api/operators/{id}/approve` | Mark verified |
//! | `POST` | `/api/operators/{id}/reject` | Remove a registration |
//! | `GET` | `/api/operators/check-admin` | Admin lookup by email |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use epiwatch_types::{
    AdminStatus, HealthOperator, OperationStatus, OperatorId, OperatorRegistration,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::state::AppState;

/// Emails with administrator rights.
pub(crate) const ADMIN_EMAILS: &[&str] = &["admin@epiwatch.or.ke"];

/// Query parameters for `GET /api/operators`.
#[derive(Debug, serde::Deserialize)]
pub struct OperatorsQuery {
    /// `pending` | `verified`; anything else (or absent) lists everyone.
    pub status: Option<String>,
}

/// Query parameters for the admin check.
#[derive(Debug, serde::Deserialize)]
pub struct AdminQuery {
    /// Email to look up.
    pub email: String,
}

/// List operator registrations.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OperatorsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let operators = state.operators.read().await;
    let filtered: Vec<HealthOperator> = operators
        .iter()
        .filter(|op| match params.status.as_deref() {
            Some("pending") => !op.is_verified,
            Some("verified") => op.is_verified,
            _ => true,
        })
        .cloned()
        .collect();
    Ok(Json(filtered))
}

/// Submit a registration. Emails must be unique; the operator starts
/// unverified.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<OperatorRegistration>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let mut operators = state.operators.write().await;
    if operators
        .iter()
        .any(|op| op.email.eq_ignore_ascii_case(&payload.email))
    {
        return Err(ApiError::BadRequest(format!(
            "Operator with email '{}' already registered",
            payload.email
        )));
    }

    let operator = HealthOperator {
        id: OperatorId::new(),
        full_name: payload.full_name,
        email: payload.email,
        phone: payload.phone,
        organization: payload.organization,
        license_number: payload.license_number,
        county: payload.county,
        role: payload.role,
        is_verified: false,
        verified_at: None,
        created_at: Utc::now(),
    };
    tracing::info!(email = %operator.email, "operator registered");
    operators.push(operator);

    Ok((
        StatusCode::CREATED,
        Json(OperationStatus {
            success: true,
            message: "Registration submitted for review".to_owned(),
        }),
    ))
}

/// Approve a registration: sets the verified flag and timestamp.
pub async fn approve(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let mut operators = state.operators.write().await;
    let operator = operators
        .iter_mut()
        .find(|op| op.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("Operator {id} not found")))?;

    operator.is_verified = true;
    operator.verified_at = Some(Utc::now());
    tracing::info!(email = %operator.email, "operator approved");

    Ok(Json(OperationStatus {
        success: true,
        message: format!("Operator {} approved", operator.full_name),
    }))
}

/// Reject a registration: removes it entirely.
pub async fn reject(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let mut operators = state.operators.write().await;
    let before = operators.len();
    operators.retain(|op| op.id != id);
    if operators.len() == before {
        return Err(ApiError::NotFound(format!("Operator {id} not found")));
    }
    tracing::info!(%id, "operator rejected");

    Ok(Json(OperationStatus {
        success: true,
        message: "Registration rejected".to_owned(),
    }))
}

/// Whether an email belongs to an administrator.
pub async fn check_admin(
    Query(params): Query<AdminQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let is_admin = ADMIN_EMAILS
        .iter()
        .any(|admin| admin.eq_ignore_ascii_case(&params.email));
    Ok(Json(AdminStatus { is_admin }))
}

/// Parse an operator ID from the request path.
fn parse_id(s: &str) -> Result<OperatorId, ApiError> {
    s.parse::<Uuid>()
        .map(OperatorId::from)
        .map_err(|e| ApiError::BadRequest(format!("invalid operator id '{s}': {e}")))
}
