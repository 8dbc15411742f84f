//! ロギング初期化
//!
//! `DISCOVERY_LOG_LEVEL`（旧: `LOG_LEVEL`）でフィルタを指定する。
//! `DISCOVERY_LOG_DIR`（旧: `LOG_DIR`）が設定されていれば、標準出力に加えて
//! 日次ローテーションのログファイルにも出力する。

use crate::config::get_env_with_fallback;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログファイル名のプレフィックス
pub const LOG_FILE_PREFIX: &str = "discovery.log";

const DEFAULT_LOG_LEVEL: &str = "info";

/// ログ出力先の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` 形式のフィルタ
    pub filter: String,
    /// ログファイル出力先ディレクトリ
    pub log_dir: Option<String>,
}

impl LogConfig {
    /// 環境変数から読み込む
    pub fn from_env() -> Self {
        let filter = get_env_with_fallback("DISCOVERY_LOG_LEVEL", "LOG_LEVEL")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_dir = get_env_with_fallback("DISCOVERY_LOG_DIR", "LOG_DIR")
            .filter(|value| !value.is_empty());
        Self { filter, log_dir }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }
}

/// グローバルsubscriberを初期化する
///
/// ファイル出力時は返される `WorkerGuard` をプロセス終了まで保持すること。
pub fn init() -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
    let config = LogConfig::from_env();
    let registry = tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt::layer().with_target(true));

    match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            registry.try_init()?;
            Ok(None)
        }
    }
}
