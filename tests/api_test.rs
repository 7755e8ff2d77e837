//! Integration tests for API endpoints.
//!
//! Each test drives a fresh router backed by a seeded in-memory store,
//! so no server process is needed.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use user_registry::api::{create_router, AppState};
use user_registry::infra::{UserRepository, UserStore};
use user_registry::NumberPolicy;

// =============================================================================
// Test Helpers
// =============================================================================

fn setup() -> (Router, Arc<UserStore>) {
    let store = Arc::new(UserStore::with_sample_users(NumberPolicy::MaxPlusOne));
    let app = create_router(AppState::new(store.clone()));
    (app, store)
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// =============================================================================
// Root & Health
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let (app, _) = setup();

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome to User Registry");
}

#[tokio::test]
async fn test_health_reports_user_count() {
    let (app, _) = setup();

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["users"], 3);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (app, _) = setup();

    let response = app
        .oneshot(empty_request("GET", "/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert!(body["paths"]["/users/{number}"].is_object());
}

// =============================================================================
// GET /users
// =============================================================================

#[tokio::test]
async fn test_list_users() {
    let (app, _) = setup();

    let response = app.oneshot(empty_request("GET", "/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], 200);
    assert_eq!(body["message"], "Lookup successful");

    let users = body["data"]["users"].as_array().unwrap();
    let numbers: Vec<u64> = users.iter().map(|u| u["number"].as_u64().unwrap()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(users[0]["id"], "user01");
    assert_eq!(users[0]["name"], "너구리");
    assert!(users[0]["registeredDate"].is_string());
    assert!(users[0].get("password").is_none());
}

// =============================================================================
// GET /users/{number}
// =============================================================================

#[tokio::test]
async fn test_get_user() {
    let (app, _) = setup();

    let response = app.oneshot(empty_request("GET", "/users/2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["user"]["number"], 2);
    assert_eq!(body["data"]["user"]["id"], "user02");
}

#[tokio::test]
async fn test_get_missing_user_is_404() {
    let (app, _) = setup();

    let response = app.oneshot(empty_request("GET", "/users/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_negative_number_is_404() {
    let (app, _) = setup();

    let response = app.oneshot(empty_request("GET", "/users/-1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_number_above_u32_max_is_404() {
    let (app, _) = setup();

    let response = app
        .oneshot(empty_request("GET", "/users/4294967296"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_non_numeric_number_is_400() {
    let (app, _) = setup();

    let response = app.oneshot(empty_request("GET", "/users/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

// =============================================================================
// POST /users
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_location() {
    let (app, store) = setup();

    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"id": "user04", "password": "pass04", "name": "Otter"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/users/4");

    let stored = store.find_by_number(4).await.unwrap();
    assert_eq!(stored.id, "user04");
    assert_eq!(stored.password, "pass04");
}

#[tokio::test]
async fn test_create_user_ignores_client_number() {
    let (app, store) = setup();

    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"number": 1, "id": "user04", "password": "pass04", "name": "Otter"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/users/4");
    assert_eq!(store.find_by_number(1).await.unwrap().id, "user01");
}

#[tokio::test]
async fn test_create_user_malformed_body_is_400() {
    let (app, store) = setup();

    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_create_user_missing_field_is_400() {
    let (app, store) = setup();

    let response = app
        .oneshot(json_request("POST", "/users", json!({"id": "user04", "name": "Otter"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_create_user_empty_id_is_400() {
    let (app, store) = setup();

    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"id": "", "password": "pass04", "name": "Otter"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "id is required");
    assert_eq!(store.len().await, 3);
}

// =============================================================================
// PUT /users/{number}
// =============================================================================

#[tokio::test]
async fn test_update_user() {
    let (app, store) = setup();
    let before = store.find_by_number(2).await.unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/users/2",
            json!({"id": "user02x", "password": "p", "name": "N"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/users/2");

    let after = store.find_by_number(2).await.unwrap();
    assert_eq!(after.id, "user02x");
    assert_eq!(after.password, "p");
    assert_eq!(after.name, "N");
    assert_eq!(after.registered_date, before.registered_date);
}

#[tokio::test]
async fn test_update_missing_user_is_404() {
    let (app, _) = setup();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/users/99",
            json!({"id": "x", "password": "y", "name": "z"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_malformed_body_is_400() {
    let (app, store) = setup();

    let response = app
        .oneshot(json_request("PUT", "/users/1", json!({"id": 5})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.find_by_number(1).await.unwrap().id, "user01");
}

// =============================================================================
// DELETE /users/{number}
// =============================================================================

#[tokio::test]
async fn test_delete_user() {
    let (app, store) = setup();

    let response = app.oneshot(empty_request("DELETE", "/users/3")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_delete_missing_user_is_404() {
    let (app, store) = setup();

    let response = app.oneshot(empty_request("DELETE", "/users/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_delete_negative_number_is_404() {
    let (app, store) = setup();

    let response = app.oneshot(empty_request("DELETE", "/users/-1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_update_number_above_u32_max_is_404() {
    let (app, _) = setup();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/users/4294967296",
            json!({"id": "x", "password": "y", "name": "z"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Full Lifecycle
// =============================================================================

#[tokio::test]
async fn test_create_delete_create_reuses_number() {
    let (app, _) = setup();
    let body = json!({"id": "user04", "password": "pass04", "name": "Otter"});

    let first = app
        .clone()
        .oneshot(json_request("POST", "/users", body.clone()))
        .await
        .unwrap();
    assert_eq!(first.headers()[header::LOCATION], "/users/4");

    let deleted = app
        .clone()
        .oneshot(empty_request("DELETE", "/users/4"))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = app
        .clone()
        .oneshot(empty_request("GET", "/users/4"))
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    let second = app
        .oneshot(json_request("POST", "/users", body))
        .await
        .unwrap();
    assert_eq!(second.headers()[header::LOCATION], "/users/4");
}
