#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use brainstudio_core::form_fields::{FieldDefinition, FieldDefinitionInput, FieldType};
use brainstudio_core::process::{NewProcess, Process};
use brainstudio_core::store::MemoryStore;
use http_body_util::BodyExt;
use tower::ServiceExt;

use brainstudio_api::config::ServerConfig;
use brainstudio_api::router::build_app_router;
use brainstudio_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
        log_json: false,
    }
}

/// Build the full application router over `store`, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState { store };
    build_app_router(state, &config)
}

/// Catalog entry `email` (required, simple address pattern).
pub fn email_definition() -> FieldDefinition {
    let mut input = FieldDefinitionInput::new("email", "Email", FieldType::Email);
    input.required = true;
    input.validation_pattern = Some("^[^@\\s]+@[^@\\s]+$".to_string());
    FieldDefinition::create(input).unwrap()
}

/// Catalog entry `department`, a select over three options.
pub fn department_definition() -> FieldDefinition {
    let mut input = FieldDefinitionInput::new("department", "Department", FieldType::Select);
    input.options = Some(vec!["HR".into(), "Finance".into(), "IT".into()]);
    FieldDefinition::create(input).unwrap()
}

/// A store holding the two definitions above and one empty process.
pub fn seeded_store() -> (Arc<MemoryStore>, Process) {
    let store = Arc::new(MemoryStore::with_definitions(vec![
        email_definition(),
        department_definition(),
    ]));
    let process = store.insert_process(NewProcess::named("Onboarding"));
    (store, process)
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
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

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
