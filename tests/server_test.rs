//! 静的配信の統合テスト
//!
//! ランダムポートで起動し、生の HTTP/1.1 リクエストで確認する

use std::net::SocketAddr;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use wine_site::server::static_router;

async fn spawn_server(root: &std::path::Path) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().unwrap();
    let app = static_router(root);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn get(addr: SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("接続失敗");
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        path
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8_lossy(&response).to_string()
}

#[tokio::test]
async fn test_serves_index_for_root() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("index.html"), "<h1>Новое русское вино</h1>").unwrap();

    let addr = spawn_server(dir.path()).await;
    let response = get(addr, "/").await;

    assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
    assert!(response.contains("<h1>Новое русское вино</h1>"));
}

#[tokio::test]
async fn test_serves_files_verbatim() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::create_dir_all(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css").join("style.css"), "body { color: #700; }").unwrap();

    let addr = spawn_server(dir.path()).await;
    let response = get(addr, "/css/style.css").await;

    assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
    assert!(response.ends_with("body { color: #700; }"));
}

#[tokio::test]
async fn test_missing_file_is_404() {
    let dir = tempdir().expect("Failed to create temp dir");

    let addr = spawn_server(dir.path()).await;
    let response = get(addr, "/missing.html").await;

    assert!(response.starts_with("HTTP/1.1 404"), "{}", response);
}
