//! End-to-end tests over the flat-file store.
//!
//! These exercise the real `JsonFileStore` backend through the HTTP
//! surface: durability across an app rebuild, the bootstrap path, and
//! the storage-error response for a corrupt document.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use studyclever_store::JsonFileStore;

// ---------------------------------------------------------------------------
// Test: a created domain survives an app rebuild over the same file
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_domain_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");

    let store = JsonFileStore::new(&path);
    store.ensure_exists().await.unwrap();
    let app = common::build_test_app(Arc::new(store));

    let response = post_json(
        app,
        "/api/admin/domains",
        json!({
            "name": "Math",
            "description": "Numbers",
            "icon": "calc",
            "color": "#fff",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;

    // The document on disk now contains the domain.
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"Math\""));

    // A fresh app over the same file serves it.
    let reopened = common::build_test_app(Arc::new(JsonFileStore::new(&path)));
    let listed = body_json(get(reopened, "/api/domains").await).await;
    assert_eq!(listed.as_array().unwrap(), &vec![created]);
}

// ---------------------------------------------------------------------------
// Test: a bootstrapped store serves empty listings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bootstrapped_store_serves_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("db.json"));
    store.ensure_exists().await.unwrap();

    let app = common::build_test_app(Arc::new(store));

    let response = get(app, "/api/domains").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ---------------------------------------------------------------------------
// Test: a corrupt document surfaces as a 500 storage error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn corrupt_document_is_500_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(&path, "{ this is not a catalog").unwrap();

    let app = common::build_test_app(Arc::new(JsonFileStore::new(&path)));

    let response = get(app, "/api/domains").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert_eq!(json["error"], "A storage error occurred");
}

// ---------------------------------------------------------------------------
// Test: a missing document surfaces as a 500 storage error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_document_is_500_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(Arc::new(JsonFileStore::new(dir.path().join("gone.json"))));

    let response = get(app, "/api/domains").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "STORAGE_ERROR");
}
