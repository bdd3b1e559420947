//! Disease catalogue endpoints (full CRUD).
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/diseases` | List with category/search/pagination |
//! | `POST` | `/api/diseases` | Create |
//! | `GET` | `/api/diseases/{id}` | Single disease |
//! | `PATCH` | `/api/diseases/{id}` | Partial update |
//! | `DELETE` | `/api/diseases/{id}` | Delete (204) |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use epiwatch_types::{
    Disease, DiseaseCategory, DiseaseCreate, DiseaseId, DiseaseListResponse, DiseaseUpdate,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for `GET /api/diseases`.
#[derive(Debug, serde::Deserialize)]
pub struct DiseasesQuery {
    /// Filter by epidemiological category.
    pub category: Option<DiseaseCategory>,
    /// Case-insensitive name substring.
    pub search: Option<String>,
    /// Pagination offset (default 0).
    pub skip: Option<usize>,
    /// Page size (default 100).
    pub limit: Option<usize>,
}

/// List diseases matching the filters.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DiseasesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let diseases = state.diseases.read().await;
    let search = params.search.as_deref().map(str::to_lowercase);

    let data: Vec<Disease> = diseases
        .iter()
        .filter(|d| params.category.is_none_or(|c| d.category == c))
        .filter(|d| {
            search
                .as_deref()
                .is_none_or(|s| d.name.to_lowercase().contains(s))
        })
        .skip(params.skip.unwrap_or(0))
        .take(params.limit.unwrap_or(100))
        .cloned()
        .collect();

    let count = data.len();
    Ok(Json(DiseaseListResponse { data, count }))
}

/// Single disease by ID.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let diseases = state.diseases.read().await;
    diseases
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Disease {id} not found")))
}

/// Create a disease. Names must be unique.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DiseaseCreate>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let mut diseases = state.diseases.write().await;
    if diseases
        .iter()
        .any(|d| d.name.eq_ignore_ascii_case(&payload.name))
    {
        return Err(ApiError::BadRequest(format!(
            "Disease '{}' already exists",
            payload.name
        )));
    }

    let disease = Disease {
        id: DiseaseId::new(),
        name: payload.name,
        category: payload.category,
        description: payload.description,
        symptoms: payload.symptoms,
        created_at: Utc::now(),
        updated_at: None,
    };
    diseases.push(disease.clone());
    tracing::info!(name = %disease.name, "disease created");

    Ok((StatusCode::CREATED, Json(disease)))
}

/// Partially update a disease. Absent fields are left unchanged.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<DiseaseUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let mut diseases = state.diseases.write().await;
    let disease = diseases
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("Disease {id} not found")))?;

    if let Some(name) = payload.name {
        disease.name = name;
    }
    if let Some(category) = payload.category {
        disease.category = category;
    }
    if let Some(description) = payload.description {
        disease.description = Some(description);
    }
    if let Some(symptoms) = payload.symptoms {
        disease.symptoms = symptoms;
    }
    disease.updated_at = Some(Utc::now());

    Ok(Json(disease.clone()))
}

/// Delete a disease. Answers `204 No Content`.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let mut diseases = state.diseases.write().await;
    let before = diseases.len();
    diseases.retain(|d| d.id != id);
    if diseases.len() == before {
        return Err(ApiError::NotFound(format!("Disease {id} not found")));
    }
    tracing::info!(%id, "disease deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Parse a disease ID from the request path.
fn parse_id(s: &str) -> Result<DiseaseId, ApiError> {
    s.parse::<Uuid>()
        .map(DiseaseId::from)
        .map_err(|e| ApiError::BadRequest(format!("invalid disease id '{s}': {e}")))
}
