//! Contract Test: GET /health, GET /swagger/openapi.json, GET /swagger

use crate::support::app::{create_test_app, into_json, post_json};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use discovery::api::{OPENAPI_PATH, SWAGGER_UI_PATH};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_without_auth() {
    let (app, _state) = create_test_app();
    post_json(&app, "/register", json!({"endpoints": {"a": "http://a", "b": "http://b"}})).await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let (status, body) = into_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "endpoints": 2}));
}

#[tokio::test]
async fn test_openapi_document_is_public() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(Request::builder().uri(OPENAPI_PATH).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let (status, body) = into_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Discovery Service API");
    assert!(body["paths"]["/register"]["post"].is_object());
    assert!(body["paths"]["/get-url"]["get"].is_object());
    assert!(body["components"]["securitySchemes"]["BearerAuth"].is_object());
}

#[tokio::test]
async fn test_swagger_ui_is_public_html() {
    let (app, _state) = create_test_app();

    for uri in [SWAGGER_UI_PATH, "/swagger/index.html"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(OPENAPI_PATH));
    }
}
