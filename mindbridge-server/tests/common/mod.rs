//! Shared test utilities for mindbridge-server integration tests

use std::net::SocketAddr;
use std::sync::Arc;

use mindbridge_server::{AppState, MindbridgeServer, ServerConfig};
use tokio::net::TcpListener;

/// Creates a test server with default config, returns state and address
#[allow(dead_code)]
pub async fn create_test_server() -> (Arc<AppState>, SocketAddr) {
    create_test_server_with_config(ServerConfig::default()).await
}

/// Creates a test server with custom config
#[allow(dead_code)]
pub async fn create_test_server_with_config(config: ServerConfig) -> (Arc<AppState>, SocketAddr) {
    let state = Arc::new(AppState::new());

    let server = MindbridgeServer::with_state(config, Arc::clone(&state));
    let addr = spawn_server(server).await;

    (state, addr)
}

/// Base URL of the API on a spawned server
#[allow(dead_code)]
pub fn api_url(addr: SocketAddr, path: &str) -> String {
    format!("http://{addr}/api{path}")
}

/// Spawns server in background task, returns bound address
async fn spawn_server(server: MindbridgeServer) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run_with_listener(listener).await;
    });

    // Brief delay to ensure server is accepting connections
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    addr
}
