//! 通信プロトコル定義
//!
//! 登録・解決APIのリクエスト/レスポンス型を定義します。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// 結果ステータス（成功）
pub const RESULT_OK: &str = "ok";

/// 結果ステータス（失敗）
pub const RESULT_ERROR: &str = "error";

/// エンドポイント登録リクエスト
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// エンドポイント名 → URLテンプレート
    #[serde(default, alias = "Endpoints")]
    #[schema(example = json!({"users": "http://users.internal/<id:int>"}))]
    pub endpoints: Option<HashMap<String, String>>,
    /// 共有シークレット（サーバー側で設定されている場合のみ検証）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

/// エンドポイント登録レスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct RegisterResponse {
    /// 結果 ("ok")
    pub result: String,
    /// 登録（上書き含む）したエンドポイント数
    pub registered: usize,
}

impl RegisterResponse {
    /// 成功レスポンスを作成
    pub fn ok(registered: usize) -> Self {
        Self {
            result: RESULT_OK.to_string(),
            registered,
        }
    }
}

/// URL解決レスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ResolveResponse {
    /// 置換済みURL
    #[schema(example = "http://users.internal/42")]
    pub url: String,
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ErrorResponse {
    /// 結果 ("error")
    pub result: String,
    /// エラーメッセージ
    pub message: String,
}

impl ErrorResponse {
    /// エラーレスポンスを作成
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            result: RESULT_ERROR.to_string(),
            message: message.into(),
        }
    }
}

/// ヘルスチェックレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct HealthResponse {
    /// 稼働状態 ("ok")
    pub status: String,
    /// 登録済みエンドポイント数
    pub endpoints: usize,
}
