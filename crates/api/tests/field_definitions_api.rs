//! HTTP-level integration tests for `/api/v1/field-definitions`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use brainstudio_core::store::{ConsoleStore, MemoryStore};
use common::{body_json, build_test_app, delete, email_definition, get, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let app = build_test_app(Arc::new(MemoryStore::new()));
    let response = get(app, "/api/v1/field-definitions").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn create_assigns_id_and_persists() {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app(store.clone());

    let response = post_json(
        app.clone(),
        "/api/v1/field-definitions",
        json!({
            "key": "email",
            "label": "Email",
            "type": "email",
            "required": true,
            "placeholder": "   ",
            "options": ["ignored"]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let created = &json["data"];
    assert!(!created["id"].as_str().unwrap().is_empty());
    assert_eq!(created["key"], "email");
    assert_eq!(created["type"], "email");
    assert_eq!(created["required"], true);
    assert_eq!(created["placeholder"], "   ");
    assert!(created.get("options").is_none());

    let stored = store.load_field_definitions().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, created["id"].as_str().unwrap());

    let listed = body_json(get(app, "/api/v1/field-definitions").await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_with_blank_label_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let response = post_json(
        build_test_app(store.clone()),
        "/api/v1/field-definitions",
        json!({ "key": "email", "label": "  ", "type": "text" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(store.load_field_definitions().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_attributes_and_keeps_id() {
    let definition = email_definition();
    let store = Arc::new(MemoryStore::with_definitions(vec![definition.clone()]));

    let response = put_json(
        build_test_app(store.clone()),
        &format!("/api/v1/field-definitions/{}", definition.id),
        json!({ "key": "contact", "label": "Contact", "type": "text" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], definition.id.as_str());
    assert_eq!(json["data"]["key"], "contact");
    assert_eq!(json["data"]["required"], false);
    assert!(json["data"].get("validationPattern").is_none());

    let stored = store.load_field_definitions().await.unwrap();
    assert_eq!(stored[0].key, "contact");
}

#[tokio::test]
async fn update_unknown_id_returns_404() {
    let response = put_json(
        build_test_app(Arc::new(MemoryStore::new())),
        "/api/v1/field-definitions/missing",
        json!({ "key": "a", "label": "A", "type": "text" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "FieldDefinition with id missing not found");
}

#[tokio::test]
async fn delete_removes_definition() {
    let definition = email_definition();
    let store = Arc::new(MemoryStore::with_definitions(vec![definition.clone()]));

    let response = delete(
        build_test_app(store.clone()),
        &format!("/api/v1/field-definitions/{}", definition.id),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(store.load_field_definitions().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_unknown_id_returns_404() {
    let response = delete(
        build_test_app(Arc::new(MemoryStore::new())),
        "/api/v1/field-definitions/missing",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn replace_all_overwrites_catalog() {
    let store = Arc::new(MemoryStore::with_definitions(vec![email_definition()]));

    let response = put_json(
        build_test_app(store.clone()),
        "/api/v1/field-definitions",
        json!([
            { "id": "f1", "key": "name", "label": "Name", "type": "text", "required": true },
            { "id": "f2", "key": "agree", "label": "Agree", "type": "checkbox", "options": ["x"] }
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = store.load_field_definitions().await.unwrap();
    let ids: Vec<&str> = stored.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["f1", "f2"]);
    assert!(stored[1].options.is_none());
}

#[tokio::test]
async fn replace_all_rejects_duplicate_ids() {
    let store = Arc::new(MemoryStore::with_definitions(vec![email_definition()]));

    let response = put_json(
        build_test_app(store.clone()),
        "/api/v1/field-definitions",
        json!([
            { "id": "f1", "key": "a", "label": "A", "type": "text" },
            { "id": "f1", "key": "b", "label": "B", "type": "text" }
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.load_field_definitions().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unavailable_store_returns_503() {
    let store = Arc::new(MemoryStore::new());
    store.set_available(false);

    let response = get(build_test_app(store), "/api/v1/field-definitions").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "SERVICE_UNAVAILABLE");
}
