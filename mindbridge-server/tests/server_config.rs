//! Tests that a spawned server is wired to its state and CORS policy

mod common;

use mindbridge_core::Store;
use mindbridge_server::ServerConfig;

#[tokio::test]
async fn server_state_is_seeded() {
    let (state, _addr) = common::create_test_server().await;
    assert_eq!(state.store.resources(None).unwrap().len(), 4);
    assert_eq!(state.store.campus_services(None).unwrap().len(), 3);
}

#[tokio::test]
async fn health_reports_ok() {
    let (_state, addr) = common::create_test_server().await;
    let body: serde_json::Value = reqwest::get(common::api_url(addr, "/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let mut config = ServerConfig::new("127.0.0.1", 0);
    config.cors_origins = vec!["http://localhost:5173".into()];
    let (_state, addr) = common::create_test_server_with_config(config).await;

    let response = reqwest::Client::new()
        .get(common::api_url(addr, "/resources"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
}

#[tokio::test]
async fn cors_defaults_to_any_origin() {
    let (_state, addr) = common::create_test_server().await;

    let response = reqwest::Client::new()
        .get(common::api_url(addr, "/resources"))
        .header("Origin", "http://elsewhere.example")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
