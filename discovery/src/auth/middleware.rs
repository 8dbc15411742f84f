//! 認証ミドルウェア実装
//!
//! レジストリ本体は認証を一切知らない。ここでの検証はすべて
//! レジストリ呼び出しの前に行う。

use crate::api::error::AppError;
use crate::common::error::{DiscoveryError, DiscoveryResult};
use crate::config::AuthConfig;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

/// Bearer認証ミドルウェア
///
/// Authorizationヘッダーから "Bearer {token}" を抽出し、設定済みトークンと照合する
///
/// # Returns
/// * `Ok(Response)` - 認証成功（または認証無効化モード）
/// * `Err(AppError)` - 認証失敗、401 Unauthorized
pub async fn bearer_auth_middleware(
    State(auth): State<AuthConfig>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if auth.disabled {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| {
            tracing::warn!(
                path = %request.uri().path(),
                "Missing or malformed Authorization header"
            );
            DiscoveryError::MissingAuthorization
        })?;

    match auth.bearer_token.as_deref() {
        Some(expected) if expected == token => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!(path = %request.uri().path(), "Bearer token mismatch");
            Err(DiscoveryError::Authentication("bearer token mismatch".to_string()).into())
        }
        None => {
            tracing::warn!("Bearer token is not configured; rejecting request");
            Err(DiscoveryError::Authentication("bearer token not configured".to_string()).into())
        }
    }
}

/// リクエストに含まれる `secret_key` を検証する
///
/// サーバー側で共有シークレットが設定されていない場合は常に成功する。
pub fn verify_secret_key(auth: &AuthConfig, provided: Option<&str>) -> DiscoveryResult<()> {
    match auth.secret_key.as_deref() {
        None => Ok(()),
        Some(expected) if provided == Some(expected) => Ok(()),
        Some(_) => {
            tracing::warn!("Secret key mismatch");
            Err(DiscoveryError::InvalidSecretKey)
        }
    }
}
