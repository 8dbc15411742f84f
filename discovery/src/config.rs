//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to legacy variable names with warning logs, plus the `.env` loading done
//! once at startup.

use crate::common::error::{CommonError, CommonResult};
use std::path::{Path, PathBuf};

/// Default listen port
pub const DEFAULT_PORT: u16 = 5112;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Get an environment variable with fallback to a legacy name
///
/// If the new variable name is set, returns its value.
/// If only the old (legacy) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use discovery::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("DISCOVERY_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` if neither is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// 認証無効化モードの有効/無効を取得
///
/// 環境変数 `DISCOVERY_AUTH_DISABLED`（旧: `AUTH_DISABLED`）が `true/1/yes/on` のときに有効化する。
pub fn is_auth_disabled() -> bool {
    get_env_with_fallback("DISCOVERY_AUTH_DISABLED", "AUTH_DISABLED")
        .map(|value| is_truthy(&value))
        .unwrap_or(false)
}

/// 起動時に読み込む `.env` のパス
///
/// `START_MODE=docker` のときは `<cwd>/app/.env`、それ以外は `<cwd>/.env`。
pub fn default_env_file(cwd: &Path) -> PathBuf {
    match std::env::var("START_MODE").as_deref() {
        Ok("docker") => cwd.join("app").join(".env"),
        _ => cwd.join(".env"),
    }
}

/// `.env` を読み込む
///
/// ロギング初期化より前に呼ばれるため、ここではログを出さない。
/// 既に設定されている環境変数は上書きしない。
pub fn load_env_file(path: &Path) -> Result<(), dotenvy::Error> {
    dotenvy::from_path(path)
}

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl ServerConfig {
    /// 環境変数から読み込む
    pub fn from_env() -> Self {
        let host = get_env_with_fallback_or("DISCOVERY_HOST", "HOST", DEFAULT_HOST);
        let port = get_env_with_fallback_parse("DISCOVERY_PORT", "PORT", DEFAULT_PORT);
        Self { host, port }
    }

    /// バインド先 `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 認証設定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    /// 保護ルートに要求するBearerトークン
    pub bearer_token: Option<String>,
    /// リクエストの `secret_key` と照合する共有シークレット
    pub secret_key: Option<String>,
    /// Bearer認証を無効化（開発・テスト用）
    pub disabled: bool,
}

impl AuthConfig {
    /// 認証なしの設定
    pub fn disabled() -> Self {
        Self {
            bearer_token: None,
            secret_key: None,
            disabled: true,
        }
    }

    /// Bearerトークンのみを要求する設定
    pub fn with_bearer_token(token: impl Into<String>) -> Self {
        Self {
            bearer_token: Some(token.into()),
            secret_key: None,
            disabled: false,
        }
    }

    /// 環境変数から読み込む
    ///
    /// 認証が無効化されておらずトークンも未設定の場合は設定エラー。
    pub fn from_env() -> CommonResult<Self> {
        let bearer_token = get_env_with_fallback("DISCOVERY_BEARER_TOKEN", "BEARER_TOKEN")
            .filter(|token| !token.is_empty());
        let secret_key = get_env_with_fallback("DISCOVERY_SECRET_KEY", "SECRET_KEY")
            .filter(|key| !key.is_empty());
        let disabled = is_auth_disabled();

        if disabled {
            tracing::warn!("Authentication is disabled (DISCOVERY_AUTH_DISABLED)");
        } else if bearer_token.is_none() {
            return Err(CommonError::Config(
                "DISCOVERY_BEARER_TOKEN is not set".to_string(),
            ));
        }

        Ok(Self {
            bearer_token,
            secret_key,
            disabled,
        })
    }
}
