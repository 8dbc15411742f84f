//! 共通型定義

/// エラー型定義
pub mod error;

/// HTTPリクエスト・レスポンスのペイロード
pub mod protocol;
