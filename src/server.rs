//! 静的ファイル配信
//!
//! 指定ディレクトリをそのまま配信する。ルーティングはなく、
//! ディレクトリへのリクエストには index.html を返す。

use crate::config::SiteConfig;
use crate::error::{Result, WineSiteError};
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// 配信用のルーター
pub fn static_router(root: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root))
        .layer(TraceLayer::new_for_http())
}

/// 配信を開始（プロセス終了まで戻らない）
pub async fn serve(config: &SiteConfig) -> Result<()> {
    serve_dir(&config.serve_root, config.socket_addr()).await
}

pub async fn serve_dir(root: &Path, addr: SocketAddr) -> Result<()> {
    if !root.is_dir() {
        return Err(WineSiteError::FileNotFound(root.display().to_string()));
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("配信開始: http://{} ({})", addr, root.display());

    axum::serve(listener, static_router(root))
        .await
        .map_err(|e| WineSiteError::Server(e.to_string()))
}
