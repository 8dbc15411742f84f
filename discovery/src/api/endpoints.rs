//! エンドポイント登録・URL解決APIハンドラー

use crate::api::error::AppError;
use crate::auth::verify_secret_key;
use crate::common::error::{CommonError, DiscoveryError};
use crate::common::protocol::{
    ErrorResponse, HealthResponse, RegisterRequest, RegisterResponse, ResolveResponse,
};
use crate::template::{self, ENDPOINT_KEY, SECRET_KEY};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, RawQuery, State},
    Json,
};
use tracing::debug;

/// POST /register - エンドポイント登録
#[utoipa::path(
    post,
    path = "/register",
    tag = "endpoints",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Endpoints registered", body = RegisterResponse),
        (status = 400, description = "Empty endpoints, bad body or wrong secret key", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
pub async fn register_endpoints(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, AppError> {
    let Json(req) = payload.map_err(|e| CommonError::Validation(e.body_text()))?;

    verify_secret_key(&state.auth, req.secret_key.as_deref())?;

    let endpoints = req.endpoints.unwrap_or_default();
    let registered = state.registry.register(endpoints).await?;

    Ok(Json(RegisterResponse::ok(registered)))
}

/// GET /get-url - エンドポイント名からURLを解決
///
/// `endpoint` と `secret_key` 以外のクエリパラメータは、与えられた順で
/// テンプレートのプレースホルダー置換に使われる。
#[utoipa::path(
    get,
    path = "/get-url",
    tag = "endpoints",
    params(
        ("endpoint" = String, Query, description = "Registered endpoint name"),
        ("secret_key" = Option<String>, Query, description = "Shared secret, when configured on the server")
    ),
    responses(
        (status = 200, description = "Resolved URL", body = ResolveResponse),
        (status = 400, description = "Missing endpoint or wrong secret key", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Endpoint not found", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
pub async fn get_url(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ResolveResponse>, AppError> {
    let params: Vec<(String, String)> = serde_urlencoded::from_str(query.as_deref().unwrap_or(""))
        .map_err(|e| CommonError::Validation(format!("invalid query string: {}", e)))?;

    let secret_key = first_value(&params, SECRET_KEY);
    verify_secret_key(&state.auth, secret_key)?;

    let endpoint = first_value(&params, ENDPOINT_KEY)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| CommonError::Validation("endpoint is required".to_string()))?;

    let url_template = state
        .registry
        .lookup(endpoint)
        .await
        .ok_or_else(|| DiscoveryError::EndpointNotFound(endpoint.to_string()))?;

    let pairs = params.iter().map(|(k, v)| (k.as_str(), v.as_str()));
    let url = template::resolve(&url_template, pairs, &state.reserved_keys);

    let unresolved = template::placeholders(&url);
    if !unresolved.is_empty() {
        let keys: Vec<&str> = unresolved.iter().map(|p| p.key.as_str()).collect();
        debug!(endpoint = %endpoint, unresolved = ?keys, "URL resolved with placeholders left");
    }
    debug!(endpoint = %endpoint, "URL resolved");

    Ok(Json(ResolveResponse { url }))
}

/// GET /health - 稼働確認（認証不要）
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        endpoints: state.registry.len().await,
    })
}

fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
