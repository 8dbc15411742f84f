//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `DiscoveryError`は`external_message()`と`status_code()`を提供し、
//! クライアントへ返すエラーレスポンスを生成できます。

use axum::http::StatusCode;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Discovery service error type
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Endpoint name is not registered
    #[error("Endpoint not found: {0}")]
    EndpointNotFound(String),

    /// Registration without any entries
    #[error("No endpoints provided")]
    EmptyRegistration,

    /// Registration containing an empty endpoint name
    #[error("Endpoint name must not be empty")]
    InvalidEndpointName,

    /// Shared secret in the payload did not match
    #[error("Wrong secret key")]
    InvalidSecretKey,

    /// Authorization header absent or not in `Bearer` form
    #[error("Authorization header missing or invalid")]
    MissingAuthorization,

    /// Bearer token check failed
    #[error("Authentication error: {0}")]
    Authentication(String),
}

impl DiscoveryError {
    /// Returns a safe error message for external clients.
    ///
    /// Full error details (`to_string()`) belong in server logs only.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(CommonError::Validation(_)) => "Invalid request",
            Self::Common(CommonError::Config(_)) => "Server misconfigured",
            Self::EndpointNotFound(_) => "Endpoint not found",
            Self::EmptyRegistration => "Endpoints are empty",
            Self::InvalidEndpointName => "Endpoint name must not be empty",
            Self::InvalidSecretKey => "wrong secret key",
            Self::MissingAuthorization => "Authorization header missing or invalid",
            Self::Authentication(_) => "Invalid token",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Common(CommonError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Common(_) => StatusCode::BAD_REQUEST,
            Self::EndpointNotFound(_) => StatusCode::NOT_FOUND,
            Self::EmptyRegistration => StatusCode::BAD_REQUEST,
            Self::InvalidEndpointName => StatusCode::BAD_REQUEST,
            Self::InvalidSecretKey => StatusCode::BAD_REQUEST,
            Self::MissingAuthorization => StatusCode::UNAUTHORIZED,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (Discovery)
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
