//! Gemini API client
//!
//! Relays payloads to `{base}/models/{model}:{method}?key={api_key}`.

use async_trait::async_trait;
use serde_json::Value;
use tracing::Instrument;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    generation::UpstreamTarget,
    proxy::{
        headers::build_default_headers,
        logging::RequestContext,
        provider::{GenerativeUpstream, UpstreamRequest},
    },
};

/// Gemini API client
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.gemini_api_url.clone(),
        }
    }

    /// Endpoint URL for a target, without the key parameter
    pub fn endpoint_url(&self, target: &UpstreamTarget) -> String {
        format!("{}{}", self.base_url, target.path())
    }

    async fn send(&self, ctx: &RequestContext, request: UpstreamRequest<'_>) -> AppResult<Value> {
        let body = request.payload.to_string();
        ctx.log_request_start(body.len());

        let response = self
            .client
            .post(self.endpoint_url(&request.target))
            .query(&[("key", request.api_key)])
            .headers(build_default_headers())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the key
                let e = e.without_url();
                ctx.log_transport_error(&e.to_string());
                e
            })?;

        let status = response.status();
        ctx.log_upstream_response(status.as_u16(), response.content_length());

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            ctx.log_upstream_error(status.as_u16(), &error_text);
            return Err(AppError::UpstreamFailure { status });
        }

        let result = response.json::<Value>().await.map_err(|e| {
            let e = e.without_url();
            ctx.log_transport_error(&e.to_string());
            e
        })?;

        ctx.log_request_complete();
        Ok(result)
    }
}

#[async_trait]
impl GenerativeUpstream for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, request: UpstreamRequest<'_>) -> AppResult<Value> {
        let ctx = RequestContext::new(request.generation_type, &request.target);
        let span = ctx.create_span();
        self.send(&ctx, request).instrument(span).await
    }
}
