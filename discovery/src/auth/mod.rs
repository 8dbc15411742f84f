//! 認証モジュール

/// Bearerトークン・共有シークレット検証ミドルウェア
pub mod middleware;

pub use middleware::{bearer_auth_middleware, verify_secret_key};
