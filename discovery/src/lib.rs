//! Discovery Service
//!
//! エンドポイント名とURLテンプレートを管理し、クエリパラメータで解決する中央サーバー

#![warn(missing_docs)]

/// 共通型定義（エラー・プロトコル）
pub mod common;

/// REST APIハンドラー
pub mod api;

/// Bearerトークン認証
pub mod auth;

/// エンドポイント登録管理
pub mod registry;

/// URLテンプレートのプレースホルダー置換
pub mod template;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

/// axumサーバー起動
pub mod server;

/// Shutdown controller
pub mod shutdown;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// エンドポイントレジストリ
    pub registry: registry::EndpointRegistry,
    /// 認証設定
    pub auth: config::AuthConfig,
    /// 予約済みクエリキー（置換対象外）
    pub reserved_keys: template::ReservedKeys,
}

impl AppState {
    /// 空のレジストリでアプリケーション状態を作成
    pub fn new(auth: config::AuthConfig) -> Self {
        Self {
            registry: registry::EndpointRegistry::new(),
            auth,
            reserved_keys: template::ReservedKeys::default(),
        }
    }
}
