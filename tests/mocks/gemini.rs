//! Mock Gemini API for testing
//!
//! Provides wiremock-based mocks for the three relayed endpoints:
//! - POST /models/gemini-2.5-flash-preview-05-20:generateContent
//! - POST /models/gemini-2.5-flash-image-preview:generateContent
//! - POST /models/imagen-3.0-generate-002:predict
//!
//! Mocks registered with an expected call count are verified when the
//! `MockGemini` is dropped at the end of the test.

use serde_json::{json, Value};
use wiremock::{
    matchers::{any, body_json, body_string, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::common::constants::TEST_API_KEY;

pub const TEXT_PATH: &str = "/models/gemini-2.5-flash-preview-05-20:generateContent";
pub const IMAGE_COMPOSITE_PATH: &str = "/models/gemini-2.5-flash-image-preview:generateContent";
pub const IMAGE_GEN_PATH: &str = "/models/imagen-3.0-generate-002:predict";

/// Mock Gemini API server wrapper
pub struct MockGemini {
    server: MockServer,
}

impl MockGemini {
    /// Start a new mock Gemini server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mock a successful response on `endpoint`, expecting exactly one call
    /// carrying the test key, a JSON content type and `payload` as the body
    pub async fn mock_success(&self, endpoint: &str, payload: &Value, response: &Value) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(query_param("key", TEST_API_KEY))
            .and(header("content-type", "application/json"))
            .and(body_json(payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock a success whose request and response bodies are compared as raw
    /// text, so key order and formatting count
    pub async fn mock_exact(&self, endpoint: &str, expected_body: &str, response_body: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(query_param("key", TEST_API_KEY))
            .and(body_string(expected_body))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(response_body)
                    .insert_header("content-type", "application/json"),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock an error status with a plain-text body on `endpoint`
    pub async fn mock_error(&self, endpoint: &str, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response whose body is not JSON
    pub async fn mock_non_json(&self, endpoint: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html>oops</html>")
                    .insert_header("content-type", "text/html"),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any request reaches the upstream
    pub async fn expect_no_calls(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Requests received so far
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

/// Sample upstream payloads and responses
pub struct GeminiTestData;

impl GeminiTestData {
    /// generateContent request with a single text part
    pub fn text_payload(prompt: &str) -> Value {
        json!({
            "contents": [
                { "role": "user", "parts": [{ "text": prompt }] }
            ]
        })
    }

    /// generateContent response with a single candidate
    pub fn text_response(text: &str) -> Value {
        json!({
            "candidates": [
                {
                    "content": { "role": "model", "parts": [{ "text": text }] },
                    "finishReason": "STOP",
                    "index": 0
                }
            ],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 34,
                "totalTokenCount": 46
            }
        })
    }

    /// Image composite request with inline image data
    pub fn composite_payload() -> Value {
        json!({
            "contents": [{
                "parts": [
                    { "text": "Place this product on a marble countertop" },
                    { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
                ]
            }],
            "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] }
        })
    }

    /// Imagen predict request
    pub fn predict_payload() -> Value {
        json!({
            "instances": [{ "prompt": "A sunlit billboard for a coffee brand" }],
            "parameters": { "sampleCount": 1 }
        })
    }

    /// Imagen predict response
    pub fn predict_response() -> Value {
        json!({
            "predictions": [
                { "bytesBase64Encoded": "iVBORw0KGgo=", "mimeType": "image/png" }
            ]
        })
    }
}
