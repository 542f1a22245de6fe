//! Request logging utilities for relayed calls
//!
//! Structured logging with short correlation IDs. The upstream URL is never
//! logged because it carries the API key; only the model path is.

use std::time::Instant;
use tracing::{error, info, Span};
use uuid::Uuid;

use crate::generation::{GenerationType, UpstreamTarget};

/// Context for tracking a relayed request
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    /// Generation type tag
    pub generation_type: GenerationType,
    /// Upstream path, e.g. `/models/<model>:generateContent`
    pub endpoint: String,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(generation_type: GenerationType, target: &UpstreamTarget) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            start_time: Instant::now(),
            generation_type,
            endpoint: target.path(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Log request being sent to upstream
    pub fn log_request_start(&self, body_size: usize) {
        info!(
            trace_id = %self.trace_id,
            generation_type = %self.generation_type,
            endpoint = %self.endpoint,
            body_size = %body_size,
            "Relaying request to upstream"
        );
    }

    /// Log response received from upstream
    pub fn log_upstream_response(&self, status: u16, content_length: Option<u64>) {
        info!(
            trace_id = %self.trace_id,
            generation_type = %self.generation_type,
            status = %status,
            content_length = ?content_length,
            elapsed_ms = %self.elapsed_ms(),
            "Response received from upstream"
        );
    }

    /// Log the raw error text returned by the upstream
    ///
    /// This text stays server-side; callers only see the status phrase.
    pub fn log_upstream_error(&self, status: u16, body: &str) {
        error!(
            trace_id = %self.trace_id,
            generation_type = %self.generation_type,
            endpoint = %self.endpoint,
            status = %status,
            upstream_error = %body,
            "Gemini API error"
        );
    }

    /// Log successful request completion
    pub fn log_request_complete(&self) {
        info!(
            trace_id = %self.trace_id,
            generation_type = %self.generation_type,
            endpoint = %self.endpoint,
            elapsed_ms = %self.elapsed_ms(),
            "Request completed successfully"
        );
    }

    /// Log connection or decode failure
    pub fn log_transport_error(&self, error: &str) {
        error!(
            trace_id = %self.trace_id,
            generation_type = %self.generation_type,
            endpoint = %self.endpoint,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Upstream call failed"
        );
    }

    /// Create a tracing span for this request
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "relay_request",
            trace_id = %self.trace_id,
            generation_type = %self.generation_type,
        )
    }
}
