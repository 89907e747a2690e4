//! Shared helpers for admin-server integration tests
#![allow(dead_code)]

use admin_server::db::DbService;
use admin_server::{Config, ServerState, build_app};
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// State over a fresh RocksDB datastore in a temp dir
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub async fn test_state(seed: bool) -> (ServerState, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    let service = DbService::open(&config.database_dir()).await.unwrap();
    if seed {
        service.seed_demo_catalog().await.unwrap();
    }
    (ServerState::new(config, service.db), tmp)
}

pub async fn test_app(seed: bool) -> (Router, TempDir) {
    let (state, tmp) = test_state(seed).await;
    (build_app(state), tmp)
}

/// Send one request through the router, returning status and JSON body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}
