//! ワインカタログのランディングページ生成
//!
//! スプレッドシート → カテゴリ別カタログ → HTML → 静的配信

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod sample;
pub mod server;
