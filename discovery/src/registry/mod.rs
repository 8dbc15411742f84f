//! エンドポイント登録管理
//!
//! エンドポイント名 → URLテンプレートの対応をメモリ内で管理する。
//! 永続化は行わないため、プロセス再起動でリセットされる。

use crate::common::error::{DiscoveryError, DiscoveryResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// エンドポイントレジストリ
///
/// マップ本体は外部に公開せず、登録と参照の2操作のみを提供する。
/// ロックはマップへのアクセス中だけ保持し、テンプレート置換中は保持しない。
#[derive(Clone, Default)]
pub struct EndpointRegistry {
    routes: Arc<RwLock<HashMap<String, String>>>,
}

impl EndpointRegistry {
    /// 空のレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// エンドポイントを登録（既存名は上書き）
    ///
    /// 空の登録は`EmptyRegistration`、空文字の名前を含む場合は
    /// `InvalidEndpointName`で拒否し、その場合は1件も書き込まない。
    pub async fn register(&self, entries: HashMap<String, String>) -> DiscoveryResult<usize> {
        if entries.is_empty() {
            return Err(DiscoveryError::EmptyRegistration);
        }
        if entries.keys().any(|name| name.is_empty()) {
            return Err(DiscoveryError::InvalidEndpointName);
        }

        let count = entries.len();
        let mut routes = self.routes.write().await;
        for (name, template) in entries {
            debug!(endpoint = %name, template = %template, "Registering endpoint");
            routes.insert(name, template);
        }
        let total = routes.len();
        drop(routes);

        info!(registered = count, total, "Endpoints registered");
        Ok(count)
    }

    /// エンドポイント名からテンプレートを取得
    ///
    /// 返り値はコピーなので、呼び出し側はロックなしで置換処理に使える。
    pub async fn lookup(&self, name: &str) -> Option<String> {
        self.routes.read().await.get(name).cloned()
    }

    /// 登録済みエンドポイント数
    pub async fn len(&self) -> usize {
        self.routes.read().await.len()
    }

    /// 登録済みエンドポイントが存在しないか
    pub async fn is_empty(&self) -> bool {
        self.routes.read().await.is_empty()
    }
}
