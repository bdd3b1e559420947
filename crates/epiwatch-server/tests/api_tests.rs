//! Integration tests for the EpiWatch API endpoints.
//!
//! Tests drive the Axum `Router` directly via `tower::ServiceExt`
//! without starting a TCP server, validating handler logic, routing,
//! and the error body contract.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use epiwatch_server::router::build_router;
use epiwatch_server::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_router() -> Router {
    build_router(Arc::new(AppState::new()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).unwrap()
}

fn post_json(path: &str, body: &Value) -> Request<Body> {
    Request::post(path)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_ok() {
    let response = test_router().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
}

// ---------------------------------------------------------------------------
// Counties
// ---------------------------------------------------------------------------

#[tokio::test]
async fn counties_list_covers_all_47_highest_risk_first() {
    let response = test_router().oneshot(get("/api/counties")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["count"], 47);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.first().unwrap()["county_name"], "Nairobi");
    assert_eq!(data.get(1).unwrap()["county_name"], "Mombasa");
}

#[tokio::test]
async fn counties_list_filters_by_region() {
    let response = test_router()
        .oneshot(get("/api/counties?region=Nyanza"))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 6);
}

#[tokio::test]
async fn county_detail_flattens_identity_and_stats() {
    let response = test_router().oneshot(get("/api/counties/047")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["code"], "047");
    assert_eq!(json["name"], "Nairobi");
    assert_eq!(json["region"], "Nairobi");
    assert_eq!(json["stats"]["county_code"], "047");
    assert!(json["stats"]["active_cases"].as_u64().unwrap() >= 10);
}

#[tokio::test]
async fn unknown_county_is_404_with_detail() {
    let response = test_router().oneshot(get("/api/counties/099")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["detail"], "County 099 not found");
}

#[tokio::test]
async fn county_history_serves_valid_windows() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(get("/api/counties/047/history?days=7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["county"], "Nairobi");
    assert_eq!(json["period_days"], 7);
    assert_eq!(json["history"].as_array().unwrap().len(), 7);

    // Without a window the default is 30 days.
    let default = router
        .oneshot(get("/api/counties/047/history"))
        .await
        .unwrap();
    assert_eq!(default.status(), StatusCode::OK);
    let json = body_to_json(default.into_body()).await;
    assert_eq!(json["period_days"], 30);
}

#[tokio::test]
async fn county_history_rejects_out_of_range_windows() {
    let router = test_router();

    let too_short = router
        .clone()
        .oneshot(get("/api/counties/047/history?days=2"))
        .await
        .unwrap();
    assert_eq!(too_short.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_to_json(too_short.into_body()).await;
    assert_eq!(json["detail"], "days must be between 7 and 365");

    let too_long = router
        .oneshot(get("/api/counties/047/history?days=400"))
        .await
        .unwrap();
    assert_eq!(too_long.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Diseases
// ---------------------------------------------------------------------------

#[tokio::test]
async fn diseases_seeded_and_searchable() {
    let router = test_router();

    let all = router.clone().oneshot(get("/api/diseases")).await.unwrap();
    let json = body_to_json(all.into_body()).await;
    assert_eq!(json["count"], 6);

    let searched = router
        .oneshot(get("/api/diseases?search=mal"))
        .await
        .unwrap();
    let json = body_to_json(searched.into_body()).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["name"], "Malaria");
}

#[tokio::test]
async fn disease_crud_lifecycle() {
    let router = test_router();

    // Create.
    let created = router
        .clone()
        .oneshot(post_json(
            "/api/diseases",
            &json!({
                "name": "Measles",
                "category": "viral",
                "symptoms": ["rash", "fever"]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let disease = body_to_json(created.into_body()).await;
    let id = disease["id"].as_str().unwrap().to_owned();

    // Duplicate name rejected.
    let duplicate = router
        .clone()
        .oneshot(post_json(
            "/api/diseases",
            &json!({ "name": "measles", "category": "viral" }),
        ))
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

    // Patch.
    let patched = router
        .clone()
        .oneshot(
            Request::patch(format!("/api/diseases/{id}"))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "description": "Highly contagious" })).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(patched.status(), StatusCode::OK);
    let patched_body = body_to_json(patched.into_body()).await;
    assert_eq!(patched_body["description"], "Highly contagious");
    assert!(patched_body["updated_at"].is_string());

    // Delete answers 204, then the resource is gone.
    let deleted = router
        .clone()
        .oneshot(
            Request::delete(format!("/api/diseases/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = router
        .oneshot(get(&format!("/api/diseases/{id}")))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn disease_create_validates_payload() {
    let response = test_router()
        .oneshot(post_json(
            "/api/diseases",
            &json!({ "name": "", "category": "viral" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_to_json(response.into_body()).await;
    assert!(json["detail"].is_string());
}

// ---------------------------------------------------------------------------
// Predictions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn predictions_for_county_with_disease_filter() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(get("/api/predictions/county/047"))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    let predictions = json["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0]["disease"], "Malaria");
    assert_eq!(predictions[0]["risk"], 85);

    let filtered = router
        .oneshot(get("/api/predictions/county/047?disease=Cholera"))
        .await
        .unwrap();
    let json = body_to_json(filtered.into_body()).await;
    assert!(json["predictions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn generate_prediction_is_deterministic() {
    let router = test_router();
    let payload = json!({ "county_code": "001", "forecast_days": 10 });

    let first = router
        .clone()
        .oneshot(post_json("/api/predictions/generate", &payload))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let a = body_to_json(first.into_body()).await;

    let second = router
        .oneshot(post_json("/api/predictions/generate", &payload))
        .await
        .unwrap();
    let b = body_to_json(second.into_body()).await;

    assert_eq!(a["predictions"][0]["county"], "Mombasa");
    assert_eq!(a["predictions"][0]["disease"], "Cholera");
    assert_eq!(a["predictions"][0]["risk"], b["predictions"][0]["risk"]);
    assert_eq!(
        a["predictions"][0]["estimated_cases"],
        b["predictions"][0]["estimated_cases"]
    );
}

#[tokio::test]
async fn national_summary_reflects_dataset() {
    let response = test_router()
        .oneshot(get("/api/predictions/national-summary"))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["counties_monitored"], 47);
    assert_eq!(json["high_risk_counties"], 3);
    assert_eq!(json["active_outbreaks"], 5);
    assert_eq!(json["overall_risk"], "high");
    assert_eq!(json["alerts"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

fn registration() -> Value {
    json!({
        "full_name": "Dr. Amina Hassan",
        "email": "a.hassan@coastgeneral.or.ke",
        "phone": "+254700000001",
        "organization": "Coast General Hospital",
        "license_number": "KMP-12345",
        "county": "Mombasa",
        "role": "doctor"
    })
}

#[tokio::test]
async fn operator_registration_and_approval_flow() {
    let router = test_router();

    let registered = router
        .clone()
        .oneshot(post_json("/api/operators/register", &registration()))
        .await
        .unwrap();
    assert_eq!(registered.status(), StatusCode::CREATED);

    // Duplicate email rejected.
    let duplicate = router
        .clone()
        .oneshot(post_json("/api/operators/register", &registration()))
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

    // Pending until approved.
    let pending = router
        .clone()
        .oneshot(get("/api/operators?status=pending"))
        .await
        .unwrap();
    let json = body_to_json(pending.into_body()).await;
    let id = json[0]["id"].as_str().unwrap().to_owned();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["is_verified"], false);

    let approved = router
        .clone()
        .oneshot(post_json(
            &format!("/api/operators/{id}/approve"),
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(approved.status(), StatusCode::OK);

    let verified = router
        .oneshot(get("/api/operators?status=verified"))
        .await
        .unwrap();
    let json = body_to_json(verified.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["is_verified"], true);
    assert!(json[0]["verified_at"].is_string());
}

#[tokio::test]
async fn operator_reject_removes_registration() {
    let router = test_router();

    router
        .clone()
        .oneshot(post_json("/api/operators/register", &registration()))
        .await
        .unwrap();
    let listed = router.clone().oneshot(get("/api/operators")).await.unwrap();
    let json = body_to_json(listed.into_body()).await;
    let id = json[0]["id"].as_str().unwrap().to_owned();

    let rejected = router
        .clone()
        .oneshot(post_json(&format!("/api/operators/{id}/reject"), &json!({})))
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::OK);

    let empty = router.oneshot(get("/api/operators")).await.unwrap();
    let json = body_to_json(empty.into_body()).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn operator_registration_validates_email() {
    let mut bad = registration();
    bad["email"] = json!("not-an-email");
    let response = test_router()
        .oneshot(post_json("/api/operators/register", &bad))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn admin_check_recognizes_admin_emails() {
    let router = test_router();

    let admin = router
        .clone()
        .oneshot(get("/api/operators/check-admin?email=admin@epiwatch.or.ke"))
        .await
        .unwrap();
    let json = body_to_json(admin.into_body()).await;
    assert_eq!(json["is_admin"], true);

    let regular = router
        .oneshot(get("/api/operators/check-admin?email=someone@example.com"))
        .await
        .unwrap();
    let json = body_to_json(regular.into_body()).await;
    assert_eq!(json["is_admin"], false);
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

#[tokio::test]
async fn harvest_produces_pending_insights() {
    let router = test_router();

    let harvested = router
        .clone()
        .oneshot(post_json("/api/insights/harvest", &json!({})))
        .await
        .unwrap();
    assert_eq!(harvested.status(), StatusCode::OK);
    let json = body_to_json(harvested.into_body()).await;
    let count = json["insights_count"].as_u64().unwrap();
    assert!((3..=8).contains(&count));
    assert_eq!(json["success"], true);

    let listed = router
        .clone()
        .oneshot(get("/api/insights?status=pending"))
        .await
        .unwrap();
    let json = body_to_json(listed.into_body()).await;
    assert_eq!(json["count"].as_u64().unwrap(), count);

    // Verify the first one.
    let id = json["insights"][0]["id"].as_str().unwrap().to_owned();
    let verdict = router
        .clone()
        .oneshot(post_json(
            &format!("/api/insights/{id}/verify"),
            &json!({ "approved": true }),
        ))
        .await
        .unwrap();
    let json = body_to_json(verdict.into_body()).await;
    assert_eq!(json["new_status"], "verified");

    let detail = router
        .oneshot(get(&format!("/api/insights/{id}")))
        .await
        .unwrap();
    let json = body_to_json(detail.into_body()).await;
    assert_eq!(json["status"], "verified");
}

#[tokio::test]
async fn verify_unknown_insight_is_404() {
    let response = test_router()
        .oneshot(post_json(
            "/api/insights/00000000-0000-7000-8000-000000000000/verify",
            &json!({ "approved": false }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn handling_one_alert_leaves_the_rest_active() {
    let router = test_router();

    let all = router.clone().oneshot(get("/api/alerts")).await.unwrap();
    let json = body_to_json(all.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 5);
    let id = json[0]["id"].as_str().unwrap().to_owned();

    let handled = router
        .clone()
        .oneshot(post_json(&format!("/api/alerts/{id}/handle"), &json!({})))
        .await
        .unwrap();
    assert_eq!(handled.status(), StatusCode::OK);

    let active = router
        .oneshot(get("/api/alerts?active=true"))
        .await
        .unwrap();
    let json = body_to_json(active.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn timeline_has_seven_entries() {
    let response = test_router()
        .oneshot(get("/api/alerts/timeline"))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 7);
    assert_eq!(json[0]["day"], 1);
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_issues_token_with_admin_flag() {
    let router = test_router();

    let admin = router
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "admin@epiwatch.or.ke", "password": "supersecret" }),
        ))
        .await
        .unwrap();
    assert_eq!(admin.status(), StatusCode::OK);
    let json = body_to_json(admin.into_body()).await;
    assert_eq!(json["is_admin"], true);
    assert!(json["token"].as_str().unwrap().len() > 10);

    // Tokens are valid for 24 hours from issuance.
    let expires_at: chrono::DateTime<chrono::Utc> =
        json["expires_at"].as_str().unwrap().parse().unwrap();
    let ttl = expires_at.signed_duration_since(chrono::Utc::now());
    assert!(ttl > chrono::Duration::hours(23));
    assert!(ttl <= chrono::Duration::hours(24));

    let regular = router
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "nurse@example.com", "password": "supersecret" }),
        ))
        .await
        .unwrap();
    let json = body_to_json(regular.into_body()).await;
    assert_eq!(json["is_admin"], false);
}

#[tokio::test]
async fn login_rejects_short_password() {
    let response = test_router()
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "x@example.com", "password": "short" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[tokio::test]
async fn chat_answers_with_prediction_detail() {
    let response = test_router()
        .oneshot(post_json(
            "/api/chat",
            &json!({ "message": "How bad is malaria in Nairobi right now?" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert!(json["message"].as_str().unwrap().contains("85/100"));
    assert!(!json["sources"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn chat_explicit_county_hint_wins() {
    let response = test_router()
        .oneshot(post_json(
            "/api/chat",
            &json!({ "message": "What should we prepare for?", "county": "Mombasa" }),
        ))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert!(json["message"].as_str().unwrap().contains("Mombasa"));
}

#[tokio::test]
async fn chat_rejects_empty_message() {
    let response = test_router()
        .oneshot(post_json("/api/chat", &json!({ "message": "" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
