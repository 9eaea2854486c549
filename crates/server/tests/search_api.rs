//! HTTP contract tests for the search endpoint
//!
//! These drive the full router through `tower::ServiceExt::oneshot` with a
//! stub embedder and an in-memory corpus, so every status code and body
//! shape the API promises is pinned down without any network access.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use corpus::{CorpusStore, MemoryStore};
use embedder::{EmbedError, EmbeddingProvider, StubEmbedder};
use exemplar::SearchService;
use http_body_util::BodyExt;
use ranker::CorpusRecord;
use serde_json::{json, Value};
use server::{build_router, ServerConfig, ServerState};
use tower::ServiceExt;

fn router_with(
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn CorpusStore>,
    top_k: usize,
) -> axum::Router {
    let config = ServerConfig::default();
    let service = Arc::new(SearchService::new(embedder, store, top_k));
    build_router(Arc::new(ServerState::with_service(config, service)))
}

async fn seeded_router(query_text: &str, extra: usize) -> axum::Router {
    let embedder = Arc::new(StubEmbedder::new(8));
    // One record shares the query's embedding so it always ranks first.
    let query_vec = embedder.embed(query_text).await.unwrap();
    let mut records = vec![CorpusRecord::new("best", "the closest example", query_vec)];
    for i in 0..extra {
        records.push(CorpusRecord::new(
            format!("other-{i}"),
            format!("example number {i}"),
            vec![0.01; 8],
        ));
    }
    router_with(embedder, Arc::new(MemoryStore::with_records(records)), 10)
}

fn search_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn search_returns_sorted_hits() {
    let app = seeded_router("a draft cover letter", 3).await;

    let response = app
        .oneshot(search_request(
            json!({ "user_application": "a draft cover letter" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let hits = body.as_array().expect("response should be a bare array");
    assert_eq!(hits.len(), 4);
    assert_eq!(hits[0]["id"], "best");
    assert_eq!(hits[0]["application_text"], "the closest example");

    let scores: Vec<f64> = hits
        .iter()
        .map(|h| h["similarity"].as_f64().unwrap())
        .collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1], "scores not descending: {scores:?}");
    }
}

#[tokio::test]
async fn search_truncates_to_top_k() {
    let app = seeded_router("some application", 20).await;

    let response = app
        .oneshot(search_request(json!({ "user_application": "some application" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn missing_field_is_bad_request() {
    let app = seeded_router("unused", 0).await;

    let response = app.oneshot(search_request(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "user_application is required");
}

#[tokio::test]
async fn blank_field_is_bad_request() {
    let app = seeded_router("unused", 0).await;

    let response = app
        .oneshot(search_request(json!({ "user_application": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "user_application is required");
}

#[tokio::test]
async fn malformed_json_body_is_bad_request() {
    let app = seeded_router("unused", 0).await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/search")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    // Decode failures keep the contract's error shape and never echo
    // parser detail back to the caller.
    assert_eq!(body["error"], "request body must be valid JSON");
}

#[tokio::test]
async fn wrong_method_is_405_with_json_body() {
    let app = seeded_router("unused", 0).await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/v1/search")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = seeded_router("unused", 0).await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/v1/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn empty_corpus_yields_empty_array() {
    let app = router_with(
        Arc::new(StubEmbedder::default()),
        Arc::new(MemoryStore::new()),
        10,
    );

    let response = app
        .oneshot(search_request(json!({ "user_application": "anything" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!([]));
}

struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbedError> {
        Err(EmbedError::Provider("HTTP 500: secret upstream detail".into()))
    }
}

#[tokio::test]
async fn collaborator_failure_is_opaque_500() {
    let app = router_with(Arc::new(FailingEmbedder), Arc::new(MemoryStore::new()), 10);

    let response = app
        .oneshot(search_request(json!({ "user_application": "anything" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to search for examples");
    assert!(!body["error"].as_str().unwrap().contains("secret"));
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = seeded_router("unused", 0).await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");

    let app = seeded_router("unused", 0).await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
