//! Shared helpers for API integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so
//! integration tests exercise the same middleware stack (CORS, request
//! ID, timeout, tracing, panic recovery) that production uses -- only
//! the flat-file store is swapped for an in-memory one.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use studyclever_api::config::ServerConfig;
use studyclever_api::router::build_app_router;
use studyclever_api::state::AppState;
use studyclever_store::{CatalogDb, CatalogStore, MemoryStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:8080` as CORS origin (matching the dev default)
/// and the lenient update-id mode.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        store_path: "db.json".to_string(),
        request_timeout_secs: 30,
        strict_update_ids: false,
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(store: Arc<dyn CatalogStore>) -> Router {
    build_app_with_config(store, test_config())
}

/// Build the full application router with a custom config.
pub fn build_app_with_config(store: Arc<dyn CatalogStore>, config: ServerConfig) -> Router {
    let state = AppState {
        db: Arc::new(CatalogDb::new(store)),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// App over an empty in-memory store.
///
/// Cloning the returned router shares the underlying store, so a test
/// can issue multiple requests against the same catalog.
pub fn empty_app() -> Router {
    build_test_app(Arc::new(MemoryStore::new()))
}

pub async fn get(app: Router, uri: &str) -> Response {
    request(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    request(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    request(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    request(app, Method::DELETE, uri, None).await
}

async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
