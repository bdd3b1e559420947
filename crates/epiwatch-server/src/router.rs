//! Axum router construction.
//!
//! Assembles every resource module into one [`Router`] with CORS open
//! for the dashboard and request tracing enabled.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{alerts, auth, chat, counties, diseases, insights, operators, predictions};

/// Liveness probe.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// Build the complete router.
///
/// CORS allows any origin for development; in production this should
/// be restricted to the dashboard's origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        // Counties
        .route("/api/counties", get(counties::list))
        .route("/api/counties/{code}", get(counties::get))
        .route("/api/counties/{code}/history", get(counties::history))
        // Diseases
        .route("/api/diseases", get(diseases::list).post(diseases::create))
        .route(
            "/api/diseases/{id}",
            get(diseases::get)
                .patch(diseases::update)
                .delete(diseases::delete),
        )
        // Predictions
        .route("/api/predictions/county/{code}", get(predictions::for_county))
        .route("/api/predictions/generate", post(predictions::generate))
        .route(
            "/api/predictions/national-summary",
            get(predictions::national_summary),
        )
        // Operators
        .route("/api/operators", get(operators::list))
        .route("/api/operators/register", post(operators::register))
        .route("/api/operators/{id}/approve", post(operators::approve))
        .route("/api/operators/{id}/reject", post(operators::reject))
        .route("/api/operators/check-admin", get(operators::check_admin))
        // Insights
        .route("/api/insights", get(insights::list))
        .route("/api/insights/harvest", post(insights::harvest))
        .route("/api/insights/upload", post(insights::upload))
        .route("/api/insights/{id}", get(insights::get))
        .route("/api/insights/{id}/verify", post(insights::verify))
        // Alerts
        .route("/api/alerts", get(alerts::list))
        .route("/api/alerts/timeline", get(alerts::timeline))
        .route("/api/alerts/{id}/handle", post(alerts::handle))
        // Sessions
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/signup", post(auth::signup))
        // Chat
        .route("/api/chat", post(chat::respond))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
