//! Contract Test: Bearer認証

use crate::support::app::{create_test_app, into_json};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use discovery::{api, config::AuthConfig, AppState};
use tower::ServiceExt;

#[tokio::test]
async fn test_register_without_token_returns_401() {
    let (app, state) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/register")
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"endpoints":{"test":"http://x"}}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = into_json(response).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authorization header missing or invalid");
    assert!(state.registry.is_empty().await);
}

#[tokio::test]
async fn test_get_url_with_wrong_token_returns_401() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/get-url?endpoint=test")
                .header("Authorization", "Bearer wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = into_json(response).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn test_auth_disabled_allows_anonymous_requests() {
    let app = api::create_app(AppState::new(AuthConfig::disabled()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/register")
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"endpoints":{"test":"http://x"}}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_preflight_is_answered() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/register")
                .header("Origin", "http://dashboard.local")
                .header("Access-Control-Request-Method", "POST")
                .header("Access-Control-Request-Headers", "authorization,content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
