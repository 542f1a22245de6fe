//! Metrics endpoint integration tests
//!
//! GET /metrics renders the relay counters in Prometheus text format.

use serde_json::json;

use genrelay::routes::metrics::init_metrics;

use crate::common::TestHarness;
use crate::mocks::{GeminiTestData, TEXT_PATH};

#[tokio::test]
async fn test_metrics_record_rejections_and_upstream_failures() {
    // The recorder has to exist before anything is recorded
    init_metrics();

    let harness = TestHarness::new().await;
    harness.gemini.mock_error(TEXT_PATH, 503, "overloaded").await;

    harness
        .server
        .post("/api/generate")
        .json(&json!({ "type": "videoAd", "payload": {} }))
        .await;
    harness
        .server
        .post("/api/generate")
        .json(&json!({ "type": "campaignText", "payload": GeminiTestData::text_payload("hi") }))
        .await;

    let response = harness.server.get("/metrics").await;
    response.assert_status_ok();
    let body = response.text();

    assert!(body.lines().any(|line| line.starts_with("genrelay_requests_total{")
        && line.contains(r#"type="unknown""#)
        && line.contains(r#"status="error""#)));
    assert!(body.lines().any(|line| line.starts_with("genrelay_upstream_errors_total{")
        && line.contains(r#"type="campaignText""#)
        && line.contains(r#"kind="status""#)));
    assert!(body.contains("genrelay_request_duration_seconds"));
}
