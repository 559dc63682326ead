//! Shared helpers for endpoint tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tempo_api::{router, AppContext};
use tempo_domain::Config;
use tower::ServiceExt;

/// A router wired against a throwaway data directory.
pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

/// Build an app whose state lives in a fresh temp directory and whose
/// notification command does not exist on any host.
pub fn test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut config = Config::default();
    config.storage.data_dir = dir.path().display().to_string();
    config.notifications.command = "tempo-test-missing-notifier".to_string();
    config.reports.script_dir = dir.path().join("reports").display().to_string();

    let ctx = Arc::new(AppContext::new(config));
    TestApp { router: router(ctx), _dir: dir }
}

async fn send(router: &Router, request: Request<Body>) -> Value {
    let response = router.clone().oneshot(request).await.expect("request handled");
    assert_eq!(response.status(), StatusCode::OK, "every endpoint replies 200");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("JSON body")
}

/// GET `path` and parse the JSON envelope.
pub async fn get(router: &Router, path: &str) -> Value {
    let request = Request::builder().uri(path).body(Body::empty()).expect("build request");
    send(router, request).await
}

/// POST a JSON body to `path` and parse the JSON envelope.
pub async fn post_json(router: &Router, path: &str, body: Value) -> Value {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");
    send(router, request).await
}

/// POST a form-encoded body to `path` and parse the JSON envelope.
pub async fn post_form(router: &Router, path: &str, body: &str) -> Value {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("build request");
    send(router, request).await
}
