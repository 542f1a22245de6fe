//! Genrelay - generative AI relay
//!
//! This library provides the core functionality for the Genrelay server.
//! It routes `{ type, payload }` requests to one of three fixed Gemini
//! endpoints, injecting the server-held API key, and relays the JSON response.

pub mod config;
pub mod docs;
pub mod error;
pub mod generation;
pub mod proxy;
pub mod routes;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::generation::{GenerateRequest, GenerationType};
pub use crate::proxy::{GeminiClient, GenerativeUpstream};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Upstream the relay forwards generation calls to
    pub upstream: Arc<dyn GenerativeUpstream>,
}

impl AppState {
    /// Create a new application state backed by the Gemini API
    pub fn new(config: Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()?;

        let upstream: Arc<dyn GenerativeUpstream> =
            Arc::new(GeminiClient::new(http_client, &config));

        Ok(Self::with_upstream(config, upstream))
    }

    /// Create an application state around an existing upstream
    pub fn with_upstream(config: Config, upstream: Arc<dyn GenerativeUpstream>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            upstream,
        }
    }
}
