#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use quotebook_api::config::{LogFormat, ServerConfig, StoreBackend};
use quotebook_api::router::build_app_router;
use quotebook_api::state::AppState;
use quotebook_db::repositories::{MemoryStore, Store};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: "sqlite::memory:".to_string(),
        seed_demo_data: false,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router on top of `store`.
///
/// Goes through [`build_app_router`] so tests exercise the same middleware
/// stack as production.
pub fn build_test_app(store: Arc<dyn Store>) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config()),
    };
    build_app_router(state).unwrap()
}

/// Router backed by a fresh in-memory store.
pub fn memory_app() -> Router {
    build_test_app(Arc::new(MemoryStore::new()))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
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

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an author and return its id.
pub async fn create_author(app: &Router, name: &str, surname: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/authors",
        serde_json::json!({"name": name, "surname": surname}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a quote and return the stored JSON.
pub async fn create_quote(app: &Router, body: serde_json::Value) -> serde_json::Value {
    body_json(post_json(app.clone(), "/quotes", body).await).await
}
