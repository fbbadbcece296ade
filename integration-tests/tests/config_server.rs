//! Serving from a `ServerConfig` loaded out of the environment

use std::time::Duration;

use serde_json::Value;
use serial_test::serial;
use switchyard::{ErrorPolicy, Router};
use switchyard_axum::{serve, ServeError};
use switchyard_config::{ConfigModule, ServerConfig};

fn clear_env() {
    for key in ["HOST", "PORT", "LOG_LEVEL", "LOG_FORMAT", "NOT_FOUND_MESSAGE"] {
        std::env::remove_var(key);
    }
}

#[tokio::test]
#[serial]
async fn test_serve_from_environment() {
    clear_env();
    let port = 29180;
    std::env::set_var("PORT", port.to_string());
    std::env::set_var("NOT_FOUND_MESSAGE", "nothing to see");

    let config = ConfigModule::<ServerConfig>::from_env().unwrap().get();
    clear_env();

    let server = tokio::spawn(async move {
        let _ = serve(&config, Router::new(), ErrorPolicy::default()).await;
    });

    // Give the server time to start
    tokio::time::sleep(Duration::from_millis(300)).await;

    let response = reqwest::get(format!("http://127.0.0.1:{}/anything", port))
        .await
        .expect("Failed to reach server");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "nothing to see");

    server.abort();
}

#[tokio::test]
#[serial]
async fn test_serve_refuses_invalid_config() {
    let config = ServerConfig {
        log_level: "verbose".to_string(),
        ..ServerConfig::default()
    };

    let result = serve(&config, Router::new(), ErrorPolicy::default()).await;

    assert!(matches!(result, Err(ServeError::Config(_))));
}
