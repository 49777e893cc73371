//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use onboarding_service::{api::create_router, i18n::Catalog, AppState};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    let state = AppState::new(Arc::new(Catalog::default()), "en");
    create_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn validate_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// == Validate Endpoint Tests ==

#[tokio::test]
async fn test_validate_minimal_record() {
    let app = create_test_app();

    let response = app
        .oneshot(validate_request("/onboarding/validate", r#"{"title":"Welcome"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["title"], "Welcome");
    assert_eq!(json["sort_id"], 0);
    assert!(json.get("deleted_at").is_none());
    assert!(json.get("subtitle").is_none());
}

#[tokio::test]
async fn test_validate_full_record() {
    let app = create_test_app();

    let body = r#"{
        "title": "Welcome",
        "title_ar": "مرحبا",
        "subtitle": "Get started",
        "content": "Swipe to continue",
        "sort_id": "3",
        "deleted_at": "2024-06-01"
    }"#;
    let response = app
        .oneshot(validate_request("/onboarding/validate", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["title_ar"], "مرحبا");
    assert_eq!(json["sort_id"], 3);
    assert_eq!(json["deleted_at"], "2024-06-01T00:00:00Z");
}

#[tokio::test]
async fn test_validate_null_deleted_at() {
    let app = create_test_app();

    let response = app
        .oneshot(validate_request(
            "/onboarding/validate",
            r#"{"title":"Welcome","deleted_at":null}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert!(json["deleted_at"].is_null());
    assert!(json.as_object().unwrap().contains_key("deleted_at"));
}

#[tokio::test]
async fn test_validate_missing_title() {
    let app = create_test_app();

    let response = app
        .oneshot(validate_request("/onboarding/validate", r#"{"subtitle":"x"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "validation failed");
    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["field"], "title");
    assert_eq!(fields[0]["kind"], "required");
    assert_eq!(fields[0]["message"], "Title is required");
}

#[tokio::test]
async fn test_validate_localized_via_query() {
    let app = create_test_app();

    let response = app
        .oneshot(validate_request(
            "/onboarding/validate?lang=ar",
            r#"{"title":"t","sort_id":2.5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_to_json(response.into_body()).await;
    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields[0]["field"], "sort_id");
    assert_eq!(fields[0]["kind"], "invalid_number");
    assert_eq!(fields[0]["message"], "يجب أن يكون رقمًا صحيحًا");
}

#[tokio::test]
async fn test_validate_localized_via_accept_language() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/onboarding/validate")
        .header("content-type", "application/json")
        .header("accept-language", "ar")
        .body(Body::from(r#"{"title":null}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["fields"][0]["message"], "العنوان مطلوب");
}

#[tokio::test]
async fn test_validate_reports_every_field() {
    let app = create_test_app();

    let response = app
        .oneshot(validate_request(
            "/onboarding/validate",
            r#"{"title":1,"content":false,"deleted_at":"soon"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_to_json(response.into_body()).await;
    let kinds: Vec<&str> = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["required", "type_mismatch", "invalid_date"]);
}

#[tokio::test]
async fn test_validate_malformed_json() {
    let app = create_test_app();

    let response = app
        .oneshot(validate_request("/onboarding/validate", r#"{"title":"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_validate_non_object_body() {
    let app = create_test_app();

    let response = app
        .oneshot(validate_request("/onboarding/validate", r#"["title"]"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["fields"][0]["field"], "value");
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/onboarding")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
