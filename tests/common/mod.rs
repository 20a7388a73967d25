//! Common test utilities for integration tests
//!
//! Shared fixtures for tests that talk to a mock fact-checking service.

#![allow(dead_code)]

use factprobe::domain::ports::FactCheckService;
use factprobe::infrastructure::http::{HttpClientConfig, HttpFactCheckClient};
use std::sync::Arc;

/// Build an HTTP client pointing at `base_url`
pub fn client_for(base_url: &str) -> Arc<dyn FactCheckService> {
    let client = HttpFactCheckClient::new(HttpClientConfig {
        base_url: base_url.to_string(),
        ..Default::default()
    })
    .expect("Failed to create client");
    Arc::new(client)
}

/// Body of a successful `/predict` answer
pub fn predict_body(is_true: bool, confidence: f64) -> String {
    serde_json::json!({
        "isTrue": is_true,
        "confidence": confidence,
        "status": "ok",
    })
    .to_string()
}

/// Base URL of a local port nothing is listening on
pub fn unused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Setup test logging
///
/// Initializes a tracing subscriber writing to the test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
