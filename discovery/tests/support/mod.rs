//! テスト共通サポート

pub mod http;
