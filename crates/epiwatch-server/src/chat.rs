//! The assistant chat endpoint.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/chat` | Answer a question from the surveillance data |
//!
//! There is no language model behind this endpoint; replies are built
//! from the demo dataset the same way the client's offline fallback
//! builds them, just with the server's live risk numbers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use epiwatch_data::scripted_reply;
use epiwatch_types::ChatRequest;
use validator::Validate;

use crate::error::ApiError;
use crate::state::AppState;

/// Answer a chat message.
///
/// The county and disease the client extracted (if any) take precedence
/// over re-extraction from the message text, so an explicit dashboard
/// selection always wins.
pub async fn respond(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    // Fold explicit county/disease hints back into the question so the
    // keyword extractor sees them first.
    let question = match (&payload.county, &payload.disease) {
        (Some(county), Some(disease)) => format!("{disease} {county} {}", payload.message),
        (Some(county), None) => format!("{county} {}", payload.message),
        (None, Some(disease)) => format!("{disease} {}", payload.message),
        (None, None) => payload.message.clone(),
    };

    let reply = scripted_reply(&state.data, &question);
    tracing::debug!(history_turns = payload.history.len(), "chat reply built");
    Ok(Json(reply))
}
