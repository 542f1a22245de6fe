//! Configuration management for Genrelay
//!
//! Configuration is loaded once from environment variables at startup and
//! handed to the application state. Nothing reads the environment per request.

use anyhow::{Context, Result};
use std::env;

/// Default upstream base URL for the Gemini API
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default inbound body limit (4.5 MiB, the serverless payload ceiling)
pub const DEFAULT_MAX_BODY_BYTES: usize = 4_718_592;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Gemini API base URL
    pub gemini_api_url: String,
    /// Gemini API key. Absence is reported per request, never at startup.
    pub gemini_api_key: Option<String>,

    /// Timeout for the single outbound call (in seconds)
    pub upstream_timeout_seconds: u64,
    /// Maximum accepted inbound body size (in bytes)
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("GENRELAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GENRELAY_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid GENRELAY_PORT")?,

            gemini_api_url: env::var("GEMINI_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),

            upstream_timeout_seconds: env::var("UPSTREAM_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .context("Invalid UPSTREAM_TIMEOUT_SECONDS")?,
            max_body_bytes: env::var("GENRELAY_MAX_BODY_BYTES")
                .map(|v| v.parse().context("Invalid GENRELAY_MAX_BODY_BYTES"))
                .unwrap_or(Ok(DEFAULT_MAX_BODY_BYTES))?,
        })
    }

    /// Whether the upstream API key is present
    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}
