//! Session endpoints.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/auth/login` | Exchange credentials for a token |
//! | `POST` | `/api/auth/signup` | Create an account and log in |
//!
//! This is demo authentication: any well-formed credential pair is
//! accepted, admin rights come from a fixed email list, and tokens are
//! opaque UUIDs held in the in-memory session store for 24 hours.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use chrono::{DateTime, Duration, Utc};
use epiwatch_types::{LoginRequest, SessionToken};
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::operators::ADMIN_EMAILS;
use crate::state::AppState;

/// Token lifetime in hours.
const TOKEN_TTL_HOURS: i64 = 24;

/// Log in with existing credentials.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    issue_token(&state, payload).await
}

/// Create an account and log in. Identical issuance in the demo.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    issue_token(&state, payload).await
}

async fn issue_token(
    state: &AppState,
    payload: LoginRequest,
) -> Result<Json<SessionToken>, ApiError> {
    payload.validate()?;

    let is_admin = ADMIN_EMAILS
        .iter()
        .any(|admin| admin.eq_ignore_ascii_case(&payload.email));

    let token = SessionToken {
        token: Uuid::now_v7().to_string(),
        email: payload.email,
        is_admin,
        expires_at: Utc::now()
            .checked_add_signed(Duration::hours(TOKEN_TTL_HOURS))
            .unwrap_or(DateTime::<Utc>::MAX_UTC),
    };

    let mut sessions = state.sessions.write().await;
    sessions.insert(token.token.clone(), token.clone());
    tracing::info!(email = %token.email, is_admin, "session issued");

    Ok(Json(token))
}
