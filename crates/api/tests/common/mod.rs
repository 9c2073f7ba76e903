#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use clientbook_api::config::{LogFormat, ServerConfig};
use clientbook_api::router::build_app_router;
use clientbook_api::state::AppState;
use clientbook_core::clients::{ClientService, ClientStore, InMemoryClientStore};
use clientbook_db::PgClientStore;
use http_body_util::BodyExt;
use sqlx::PgPool;
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
        shutdown_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router over the given store.
pub fn build_app_with_store(store: Arc<dyn ClientStore>) -> Router {
    let config = test_config();
    let state = AppState {
        clients: ClientService::new(store),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the application over a fresh in-memory store.
pub fn build_memory_app() -> (Arc<InMemoryClientStore>, Router) {
    let store = Arc::new(InMemoryClientStore::new());
    let app = build_app_with_store(store.clone());
    (store, app)
}

/// Build the application over PostgreSQL, using the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_store(Arc::new(PgClientStore::new(pool)))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
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

/// POST a raw body labelled as JSON, whether or not it parses.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid create/update body for a client named `name`.
pub fn client_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "dateOfBirth": "1990-05-15",
        "mainLanguage": "English",
        "secondaryLanguage": "Spanish",
        "fundingSource": "NDIS",
    })
}
