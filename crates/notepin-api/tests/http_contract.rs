//! End-to-end HTTP contract of the notes API, driven through the router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use notepin_api::{app_state::AppState, config::ApiConfig, ops::METRICS_CONTENT_TYPE, router};

fn app() -> (AppState, Router) {
    let state = AppState::new(ApiConfig::default());
    let router = router::build_router(state.clone());
    (state, router)
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, String) {
    let res = router.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn list(router: &Router) -> Vec<Value> {
    let (status, body) = send(router, get("/notes")).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (_, router) = app();
    let (status, body) = send(&router, get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "status": "ok" }));

    // unaffected by prior traffic
    send(&router, post_json("/notes", "{}")).await;
    let (status, _) = send(&router, get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn starts_with_seed_note() {
    let (_, router) = app();
    let notes = list(&router).await;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["id"], "seed-1");
    assert!(notes[0]["createdAt"].is_string());
}

#[tokio::test]
async fn create_returns_201_with_fresh_ids_newest_first() {
    let (_, router) = app();
    let mut ids = HashSet::from(["seed-1".to_string()]);

    for i in 0..3 {
        let body = json!({ "title": format!("t{i}"), "content": format!("c{i}") }).to_string();
        let (status, body) = send(&router, post_json("/notes", &body)).await;
        assert_eq!(status, StatusCode::CREATED);

        let note: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(note["title"], format!("t{i}"));
        assert!(ids.insert(note["id"].as_str().unwrap().to_string()), "duplicate id");
    }

    let notes = list(&router).await;
    assert_eq!(notes.len(), 4);
    let titles: Vec<_> = notes.iter().map(|n| n["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["t2", "t1", "t0", "Welcome"]);
}

#[tokio::test]
async fn invalid_payloads_are_400_and_leave_list_untouched() {
    let (_, router) = app();
    let before = list(&router).await;

    for bad in [
        r#"{"title":"","content":"x"}"#,
        r#"{"title":"x","content":"   "}"#,
        r#"{"title":"x"}"#,
        r#"{"title":1,"content":"x"}"#,
        r#"not json"#,
    ] {
        let (status, body) = send(&router, post_json("/notes", bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {bad}");
        assert_eq!(
            serde_json::from_str::<Value>(&body).unwrap(),
            json!({ "error": "title and content are required" })
        );
    }

    let missing_content_type = Request::builder()
        .method("POST")
        .uri("/notes")
        .body(Body::from(r#"{"title":"a","content":"b"}"#))
        .unwrap();
    let (status, _) = send(&router, missing_content_type).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(list(&router).await, before);
}

#[tokio::test]
async fn stored_fields_are_trimmed() {
    let (_, router) = app();
    let (status, body) = send(&router, post_json("/notes", r#"{"title":"  a ","content":" b"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    let note: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(note["title"], "a");
    assert_eq!(note["content"], "b");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (_, router) = app();
    let (status, body) = send(&router, get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "error": "not found" }));
}

#[tokio::test]
async fn unsupported_method_on_known_path_is_404() {
    let (_, router) = app();
    for (method, uri) in [("PUT", "/notes"), ("DELETE", "/notes"), ("POST", "/healthz"), ("POST", "/metrics")] {
        let req = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
        let (status, body) = send(&router, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(
            serde_json::from_str::<Value>(&body).unwrap(),
            json!({ "error": "not found" }),
            "{method} {uri}"
        );
    }
    assert_eq!(list(&router).await.len(), 1);
}

#[tokio::test]
async fn metrics_reflect_prior_requests() {
    let (state, router) = app();
    send(&router, get("/notes")).await;
    send(&router, post_json("/notes", r#"{"title":"a","content":"b"}"#)).await;
    send(&router, post_json("/notes", r#"{"title":""}"#)).await;
    send(&router, get("/missing")).await;

    let res = router.clone().oneshot(get("/metrics")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], METRICS_CONTENT_TYPE);
    let body = String::from_utf8(to_bytes(res.into_body(), 1 << 20).await.unwrap().to_vec()).unwrap();

    assert!(body.contains(r#"http_requests_total{method="GET",route="/notes",status="200"} 1"#));
    assert!(body.contains(r#"http_requests_total{method="POST",route="/notes",status="201"} 1"#));
    assert!(body.contains(r#"http_requests_total{method="POST",route="/notes",status="400"} 1"#));
    assert!(body.contains(r#"http_requests_total{method="GET",route="/missing",status="404"} 1"#));
    assert!(body.contains("http_request_duration_seconds_bucket"));
    assert!(body.contains("notepin_notes_stored 2"));

    // the scrape itself is counted after it completes
    let scrape = [("method", "GET"), ("route", "/metrics"), ("status", "200")];
    assert_eq!(state.metrics().requests_total.get(&scrape), 1);
    assert_eq!(state.metrics().request_duration.count(&scrape), 1);
}
