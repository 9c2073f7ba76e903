//! HTTP-level tests for the `/api/v1/clients` endpoints.
//!
//! Runs the full router over an in-memory store, so no database is needed.
//! Uses tower's `ServiceExt::oneshot` to send requests without a TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_memory_app, client_body, delete, get, post_json, post_raw, put_json,
};

/// Create a client through the API and return its id.
async fn create(app: axum::Router, name: &str) -> i64 {
    let response = post_json(app, "/api/v1/clients", client_body(name)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_submitted_fields() {
    let (_, app) = build_memory_app();
    let response = post_json(app, "/api/v1/clients", client_body("John Doe")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "John Doe");
    assert_eq!(json["dateOfBirth"], "1990-05-15");
    assert_eq!(json["mainLanguage"], "English");
    assert_eq!(json["secondaryLanguage"], "Spanish");
    assert_eq!(json["fundingSource"], "NDIS");
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
}

#[tokio::test]
async fn create_accepts_dob_key_and_timestamp() {
    let (store, app) = build_memory_app();
    let response = post_json(
        app,
        "/api/v1/clients",
        serde_json::json!({
            "name": "Jane Smith",
            "dob": "1985-09-30T00:00:00.000Z",
            "mainLanguage": "English",
            "fundingSource": "HCP",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["dateOfBirth"], "1985-09-30");
    assert!(json["secondaryLanguage"].is_null());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn create_duplicate_name_returns_409_and_writes_nothing() {
    let (store, app) = build_memory_app();
    create(app.clone(), "Jane Doe").await;

    let response = post_json(app, "/api/v1/clients", client_body("Jane Doe")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "client already exists");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn create_with_invalid_fields_returns_400_listing_them() {
    let (store, app) = build_memory_app();
    let response = post_json(
        app,
        "/api/v1/clients",
        serde_json::json!({
            "name": "",
            "dateOfBirth": "2999-01-01",
            "fundingSource": "MEDICARE",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["dateOfBirth", "fundingSource", "mainLanguage", "name"]
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn wrong_field_types_return_400_listing_them() {
    let (store, app) = build_memory_app();
    let response = post_json(
        app,
        "/api/v1/clients",
        serde_json::json!({
            "name": 42,
            "dateOfBirth": "1990-05-15",
            "mainLanguage": ["English"],
            "fundingSource": 5,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields = json["fields"].as_array().unwrap();
    let names: Vec<&str> = fields.iter().map(|f| f["field"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["fundingSource", "mainLanguage", "name"]);
    assert!(fields.iter().all(|f| f["message"] == "must be a string"));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn body_that_is_not_json_returns_400() {
    let (store, app) = build_memory_app();
    let response = post_raw(app, "/api/v1/clients", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_is_not_routed_under_a_create_segment() {
    let (store, app) = build_memory_app();
    let response = post_json(app, "/api/v1/clients/create", client_body("John")).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(store.is_empty().await);
}

// ---------------------------------------------------------------------------
// List / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_all_clients() {
    let (_, app) = build_memory_app();
    create(app.clone(), "P1").await;
    create(app.clone(), "P2").await;

    let response = get(app, "/api/v1/clients").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["P1", "P2"]);
}

#[tokio::test]
async fn get_round_trips_created_client() {
    let (_, app) = build_memory_app();
    let id = create(app.clone(), "Get Me").await;

    let response = get(app, &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Get Me");
    assert_eq!(json["secondaryLanguage"], "Spanish");
}

#[tokio::test]
async fn get_missing_client_returns_404() {
    let (_, app) = build_memory_app();
    let response = get(app, "/api/v1/clients/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Client with id 999999 not found");
}

#[tokio::test]
async fn non_integer_id_returns_400() {
    let (_, app) = build_memory_app();
    let response = get(app, "/api/v1/clients/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"][0]["field"], "id");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_preserves_omitted_secondary_language() {
    let (_, app) = build_memory_app();
    let id = create(app.clone(), "John").await;

    let response = put_json(
        app,
        &format!("/api/v1/clients/{id}"),
        serde_json::json!({
            "name": "John",
            "dateOfBirth": "1990-05-15",
            "mainLanguage": "Greek",
            "fundingSource": "DVA",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["secondaryLanguage"], "Spanish");
    assert_eq!(json["mainLanguage"], "Greek");
    assert_eq!(json["fundingSource"], "DVA");
}

#[tokio::test]
async fn update_with_null_secondary_language_keeps_it() {
    let (_, app) = build_memory_app();
    let id = create(app.clone(), "John").await;

    let mut body = client_body("John");
    body["secondaryLanguage"] = serde_json::Value::Null;
    let response = put_json(app, &format!("/api/v1/clients/{id}"), body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["secondaryLanguage"], "Spanish");
}

#[tokio::test]
async fn update_with_blank_secondary_language_clears_it() {
    let (_, app) = build_memory_app();
    let id = create(app.clone(), "John").await;

    let mut body = client_body("John");
    body["secondaryLanguage"] = serde_json::json!("");
    let response = put_json(app.clone(), &format!("/api/v1/clients/{id}"), body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["secondaryLanguage"].is_null());

    let response = get(app, &format!("/api/v1/clients/{id}")).await;
    assert!(body_json(response).await["secondaryLanguage"].is_null());
}

#[tokio::test]
async fn update_to_another_clients_name_returns_409() {
    let (_, app) = build_memory_app();
    let john = create(app.clone(), "John").await;
    create(app.clone(), "Jane").await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/clients/{john}"),
        client_body("Jane"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], "name already exists");

    let response = put_json(app, &format!("/api/v1/clients/{john}"), client_body("John")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn update_missing_client_returns_404() {
    let (_, app) = build_memory_app();
    let response = put_json(app, "/api/v1/clients/77", client_body("Nobody")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_invalid_body_returns_400() {
    let (_, app) = build_memory_app();
    let id = create(app.clone(), "John").await;

    let mut body = client_body("John");
    body["fundingSource"] = serde_json::json!("ndis");
    let response = put_json(app, &format!("/api/v1/clients/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_returns_snapshot_then_404() {
    let (store, app) = build_memory_app();
    let id = create(app.clone(), "Delete Me").await;

    let response = delete(app.clone(), &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Delete Me");
    assert!(store.is_empty().await);

    let response = delete(app.clone(), &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
