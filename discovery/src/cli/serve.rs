//! serve サブコマンド
//!
//! ディスカバリーサーバーを起動します。

use crate::config::ServerConfig;
use clap::Args;
use std::path::PathBuf;

/// serve サブコマンドの引数
///
/// 未指定の項目は `.env` 読み込み後の環境変数から補完する。
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Path to a .env file (default: ./.env, or ./app/.env with START_MODE=docker)
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}

impl ServeArgs {
    /// 環境変数由来の設定に引数を上書きする
    pub fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config
    }
}
