//! Common test utilities for Genrelay
//!
//! Shared configuration, harness and assertions used across integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::HeaderName;
use axum_test::{TestResponse, TestServer};

use genrelay::{config::Config, routes, AppState};

use crate::mocks::MockGemini;

/// Test configuration constants
pub mod constants {
    /// API key the harness configures
    pub const TEST_API_KEY: &str = "test-gemini-api-key";
    /// Methods advertised in CORS headers
    pub const CORS_METHODS: &str = "GET,OPTIONS,PATCH,DELETE,POST,PUT";
    /// Headers advertised in CORS headers
    pub const CORS_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";
}

/// Build a config pointing at `gemini_url`
pub fn test_config(gemini_url: &str, api_key: Option<&str>) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        gemini_api_url: gemini_url.to_string(),
        gemini_api_key: api_key.map(str::to_string),
        upstream_timeout_seconds: 5,
        max_body_bytes: 64 * 1024,
    }
}

/// Build a test server around a config
pub fn server_for(config: Config) -> TestServer {
    let state = Arc::new(AppState::new(config).expect("Failed to build app state"));
    TestServer::new(routes::create_router(state)).expect("Failed to create test server")
}

/// Test harness with the real router in front of a mock Gemini API
pub struct TestHarness {
    pub server: TestServer,
    pub gemini: MockGemini,
}

impl TestHarness {
    /// Harness with the test API key configured
    pub async fn new() -> Self {
        Self::with_api_key(Some(constants::TEST_API_KEY)).await
    }

    /// Harness with an optional API key
    pub async fn with_api_key(api_key: Option<&str>) -> Self {
        let gemini = MockGemini::start().await;
        let server = server_for(test_config(&gemini.uri(), api_key));
        Self { server, gemini }
    }
}

/// Read a header as a string, if present
pub fn header_str(response: &TestResponse, name: &str) -> Option<String> {
    let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Assert the four CORS headers are present with their fixed values
pub fn assert_cors_headers(response: &TestResponse) {
    assert_eq!(
        header_str(response, "access-control-allow-credentials").as_deref(),
        Some("true")
    );
    assert_eq!(
        header_str(response, "access-control-allow-origin").as_deref(),
        Some("*")
    );
    assert_eq!(
        header_str(response, "access-control-allow-methods").as_deref(),
        Some(constants::CORS_METHODS)
    );
    assert_eq!(
        header_str(response, "access-control-allow-headers").as_deref(),
        Some(constants::CORS_HEADERS)
    );
}
