//! Contract Test: GET /get-url

use crate::support::app::{
    create_test_app, get_authorized, into_json, post_json, test_state_with_secret, TEST_SECRET,
};
use axum::{http::StatusCode, Router};
use discovery::api;
use serde_json::{json, Value};

async fn app_with(routes: Value) -> Router {
    let (app, _state) = create_test_app();
    let response = post_json(&app, "/register", json!({ "endpoints": routes })).await;
    assert_eq!(response.status(), StatusCode::OK);
    app
}

async fn resolve(app: &Router, uri: &str) -> (StatusCode, Value) {
    into_json(get_authorized(app, uri).await).await
}

#[tokio::test]
async fn test_get_url_bare_placeholder() {
    let app = app_with(json!({"test": "http://example.com/<id>"})).await;

    let (status, body) = resolve(&app, "/get-url?endpoint=test&id=42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "http://example.com/42");
}

#[tokio::test]
async fn test_get_url_typed_placeholder() {
    let app = app_with(json!({"test": "http://example.com/<id:int>"})).await;

    let (status, body) = resolve(&app, "/get-url?endpoint=test&id=42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "http://example.com/42");
}

#[tokio::test]
async fn test_get_url_unresolved_placeholder_passthrough() {
    let app = app_with(json!({"test": "http://example.com/<id>"})).await;

    let (status, body) = resolve(&app, "/get-url?endpoint=test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "http://example.com/<id>");
}

#[tokio::test]
async fn test_get_url_dynamic_parameter() {
    let app = app_with(json!({"items": "http://shop/items/<item_id:int>/<lang>"})).await;

    let (status, body) =
        resolve(&app, "/get-url?endpoint=items&dynamic=item_id%3D15&lang=en").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "http://shop/items/15/en");
}

#[tokio::test]
async fn test_get_url_reserved_keys_not_substituted() {
    let app = app_with(json!({"test": "http://example.com/<endpoint>/<secret_key>"})).await;

    let (status, body) = resolve(&app, "/get-url?endpoint=test&secret_key=abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "http://example.com/<endpoint>/<secret_key>");
}

#[tokio::test]
async fn test_get_url_percent_decoded_values_inserted_literally() {
    let app = app_with(json!({"search": "http://search/?q=<q>"})).await;

    let (_, body) = resolve(&app, "/get-url?endpoint=search&q=hello%20world%26more").await;

    assert_eq!(body["url"], "http://search/?q=hello world&more");
}

#[tokio::test]
async fn test_get_url_endpoint_not_found() {
    let app = app_with(json!({"test": "http://example.com/<id>"})).await;

    let (status, body) = resolve(&app, "/get-url?endpoint=unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["result"], "error");
    assert_eq!(body["message"], "Endpoint not found");
}

#[tokio::test]
async fn test_get_url_missing_endpoint_returns_400() {
    let app = app_with(json!({"test": "http://example.com/<id>"})).await;

    let (status, body) = resolve(&app, "/get-url?id=42").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request");
}

#[tokio::test]
async fn test_get_url_with_secret() {
    let app = api::create_app(test_state_with_secret());
    let response = post_json(
        &app,
        "/register",
        json!({"secret_key": TEST_SECRET, "endpoints": {"test": "http://example.com/<id>"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let uri = format!("/get-url?secret_key={}&endpoint=test&id=42", TEST_SECRET);
    let (status, body) = resolve(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "http://example.com/42");

    let wrong = "/get-url?secret_key=wrong_secret&endpoint=test&id=42";
    let (status, body) = resolve(&app, wrong).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "wrong secret key");
}
