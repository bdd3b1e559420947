//! Integration tests for the request wrapper, cached queries, and chat
//! fallback.
//!
//! Each test spins a minimal Axum router on an ephemeral local port and
//! drives it through the real `reqwest`-backed client, so the wire
//! behavior (error bodies, 204 handling, query strings, bearer headers)
//! is exercised end to end.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::Utc;
use epiwatch_client::{ApiClient, ChatClient, ChatOutcome, ClientConfig, DiseaseFilter, Queries};
use epiwatch_data::DemoData;
use epiwatch_types::{
    ChatReply, County, CountyDetail, CountyStats, Disease, DiseaseCategory, DiseaseId,
    DiseaseListResponse, RiskLevel,
};
use serde_json::{Value, json};

/// Serve a router on an ephemeral port, returning its base URL.
async fn spawn_app(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

fn client(base: &str) -> ApiClient {
    ApiClient::new(&ClientConfig::with_base_url(base)).unwrap()
}

fn sample_detail() -> CountyDetail {
    CountyDetail {
        county: County {
            code: "047".to_owned(),
            name: "Nairobi".to_owned(),
            population: 4_397_073,
            region: "Nairobi".to_owned(),
        },
        stats: CountyStats {
            county_code: "047".to_owned(),
            county_name: "Nairobi".to_owned(),
            active_cases: 420,
            risk_level: RiskLevel::High,
            trend: "+12%".to_owned(),
            top_diseases: vec!["Malaria".to_owned(), "Flu".to_owned()],
            last_updated: Utc::now(),
        },
    }
}

#[tokio::test]
async fn missing_resource_yields_detail_message() {
    let router = Router::new().route(
        "/api/diseases/{id}",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({"detail": "not found"}))) }),
    );
    let base = spawn_app(router).await;

    let result: Result<Value, _> = client(&base).get("/api/diseases/xyz", &[]).await;
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "not found");
    assert_eq!(err.status(), Some(404));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn error_without_detail_falls_back_to_status() {
    let router = Router::new().route(
        "/api/boom",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "everything is on fire") }),
    );
    let base = spawn_app(router).await;

    let result: Result<Value, _> = client(&base).get("/api/boom", &[]).await;
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn delete_resolves_on_204_without_body() {
    let router = Router::new().route(
        "/api/diseases/{id}",
        delete(|| async { StatusCode::NO_CONTENT }),
    );
    let base = spawn_app(router).await;

    client(&base).delete("/api/diseases/abc").await.unwrap();
}

#[tokio::test]
async fn query_string_absent_when_no_parameters() {
    let router = Router::new().route(
        "/api/echo",
        get(|RawQuery(query): RawQuery| async move { Json(json!({"query": query})) }),
    );
    let base = spawn_app(router).await;
    let api = client(&base);

    let empty: Value = api.get("/api/echo", &[]).await.unwrap();
    assert_eq!(empty.get("query"), Some(&Value::Null));

    let with_params: Value = api
        .get("/api/echo", &[("days", "7".to_owned())])
        .await
        .unwrap();
    assert_eq!(
        with_params.get("query").and_then(Value::as_str),
        Some("days=7")
    );
}

#[tokio::test]
async fn bearer_token_is_attached_by_authenticated_client() {
    let router = Router::new().route(
        "/api/whoami",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned();
            Json(json!({"authorization": auth}))
        }),
    );
    let base = spawn_app(router).await;

    let plain: Value = client(&base).get("/api/whoami", &[]).await.unwrap();
    assert_eq!(plain.get("authorization").and_then(Value::as_str), Some(""));

    let authed: Value = client(&base)
        .with_token("secret-token")
        .get("/api/whoami", &[])
        .await
        .unwrap();
    assert_eq!(
        authed.get("authorization").and_then(Value::as_str),
        Some("Bearer secret-token")
    );
}

#[tokio::test]
async fn cached_county_read_hits_server_once() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route(
            "/api/counties/{code}",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(sample_detail())
            }),
        )
        .with_state(Arc::clone(&hits));
    let base = spawn_app(router).await;

    let queries = Queries::new(client(&base));
    let first = queries.county("047").await.unwrap();
    let second = queries.county("047").await.unwrap();

    assert_eq!(first.county.name, "Nairobi");
    assert_eq!(second.stats.active_cases, first.stats.active_cases);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn disease_mutation_invalidates_list_cache() {
    let hits = Arc::new(AtomicUsize::new(0));

    let list_hits = Arc::clone(&hits);
    let router = Router::new()
        .route(
            "/api/diseases",
            get(move || {
                let hits = Arc::clone(&list_hits);
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(DiseaseListResponse {
                        data: vec![Disease {
                            id: DiseaseId::new(),
                            name: "Malaria".to_owned(),
                            category: DiseaseCategory::VectorBorne,
                            description: None,
                            symptoms: vec!["fever".to_owned()],
                            created_at: Utc::now(),
                            updated_at: None,
                        }],
                        count: 1,
                    })
                }
            }),
        )
        .route(
            "/api/diseases/{id}",
            delete(|| async { StatusCode::NO_CONTENT }),
        );
    let base = spawn_app(router).await;

    let queries = Queries::new(client(&base));
    let filter = DiseaseFilter::default();

    queries.diseases(&filter).await.unwrap();
    queries.diseases(&filter).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    queries.delete_disease(DiseaseId::new()).await.unwrap();

    queries.diseases(&filter).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn chat_live_when_endpoint_answers() {
    let router = Router::new().route(
        "/api/chat",
        post(|| async {
            Json(ChatReply {
                message: "Live model answer".to_owned(),
                sources: vec!["llm".to_owned()],
                suggested_actions: Vec::new(),
            })
        }),
    );
    let base = spawn_app(router).await;

    let chat = ChatClient::new(client(&base), Arc::new(DemoData::new()));
    let outcome = chat.send("How is malaria in Nairobi?", &[]).await;
    assert!(outcome.is_live());
    assert_eq!(outcome.reply().map(|r| r.message.as_str()), Some("Live model answer"));
}

#[tokio::test]
async fn chat_degrades_to_scripted_reply_when_unreachable() {
    // Bind and immediately drop a listener so the port refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let chat = ChatClient::new(client(&base), Arc::new(DemoData::new()));
    let outcome = chat.send("How is malaria in Nairobi?", &[]).await;

    assert!(outcome.is_degraded());
    let reply = outcome.reply().unwrap();
    assert!(reply.message.contains("85/100"));
    if let ChatOutcome::Degraded { reason, .. } = &outcome {
        assert!(!reason.is_empty());
    }
}

#[tokio::test]
async fn empty_chat_message_fails_without_sending() {
    let chat = ChatClient::new(
        client("http://127.0.0.1:1"),
        Arc::new(DemoData::new()),
    );
    let outcome = chat.send("   ", &[]).await;
    assert!(matches!(outcome, ChatOutcome::Failed { .. }));
    assert!(outcome.reply().is_none());
}
