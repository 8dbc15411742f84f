use std::{io, net::SocketAddr};

use discovery::{server, shutdown::ShutdownController, AppState};
use tokio::{net::TcpListener, task::JoinHandle};

/// 実ポートにバインドしたテスト用サーバー
#[allow(dead_code)]
pub struct TestServer {
    addr: SocketAddr,
    shutdown: ShutdownController,
    handle: JoinHandle<Result<(), io::Error>>,
}

#[allow(dead_code)]
impl TestServer {
    /// サーバーがバインドしているアドレスを返す
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// ベースURL
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// サーバーを停止し、バックグラウンドタスクの終了を待つ
    pub async fn stop(self) {
        self.shutdown.request_shutdown();
        let _ = self.handle.await;
    }
}

/// 任意のアプリケーション状態でサーバーを起動する
#[allow(dead_code)]
pub async fn spawn_server(state: AppState) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = ShutdownController::default();
    let handle = tokio::spawn(server::serve(listener, state, shutdown.clone()));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}
