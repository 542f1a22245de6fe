//! Upstream provider abstraction
//!
//! The relay handler talks to the generative AI backend only through this
//! trait, so tests and alternative transports can be swapped in.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppResult;
use crate::generation::{GenerationType, UpstreamTarget};

/// A single relayed generation call
#[derive(Debug, Clone, Copy)]
pub struct UpstreamRequest<'a> {
    /// Type tag the caller sent, used for log correlation
    pub generation_type: GenerationType,
    /// Model and method resolved from the tag
    pub target: UpstreamTarget,
    /// Server-held API key
    pub api_key: &'a str,
    /// Opaque payload forwarded verbatim
    pub payload: &'a Value,
}

impl<'a> UpstreamRequest<'a> {
    pub fn new(generation_type: GenerationType, api_key: &'a str, payload: &'a Value) -> Self {
        Self {
            generation_type,
            target: generation_type.target(),
            api_key,
            payload,
        }
    }
}

/// Trait defining the interface for generative AI upstreams
///
/// # Security
///
/// Implementations MUST:
/// - Never log the API key or any URL that contains it
/// - Never forward the upstream's raw error text to the caller
#[async_trait]
pub trait GenerativeUpstream: Send + Sync {
    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Issue one POST with the payload and return the upstream's JSON body.
    ///
    /// Non-success statuses become `AppError::UpstreamFailure`; connection and
    /// decode failures become `AppError::Transport`. No retries.
    async fn generate(&self, request: UpstreamRequest<'_>) -> AppResult<Value>;
}
