//! Generation relay endpoint
//!
//! Accepts `{ type, payload }`, resolves `type` to a fixed Gemini endpoint and
//! relays `payload` there with the server-held API key.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{
    config::Config,
    error::{AppError, AppResult, ErrorResponse},
    generation::{GenerateRequest, GenerationType},
    proxy::UpstreamRequest,
    routes::metrics::{record_request, record_upstream_error},
    AppState,
};

/// A request that passed every local check and is ready for the upstream
#[derive(Debug)]
pub(crate) struct Dispatch<'a> {
    generation_type: GenerationType,
    api_key: &'a str,
    payload: Value,
}

impl<'a> Dispatch<'a> {
    fn upstream_request(&self) -> UpstreamRequest<'_> {
        UpstreamRequest::new(self.generation_type, self.api_key, &self.payload)
    }
}

/// Run the local checks in order: method, body shape, API key, type tag.
///
/// The key check precedes the type lookup, so a missing key wins over an
/// unknown type. Nothing here touches the network.
pub(crate) fn prepare<'a>(
    config: &'a Config,
    method: &Method,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Dispatch<'a>> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let request = GenerateRequest::from_slice(&body?)?;

    let api_key = config
        .gemini_api_key
        .as_deref()
        .ok_or(AppError::MissingConfiguration)?;

    let generation_type = request.generation_type()?;

    Ok(Dispatch {
        generation_type,
        api_key,
        payload: request.payload,
    })
}

/// Relay handler
///
/// This handler:
/// 1. Answers CORS pre-flight with an empty 200
/// 2. Rejects anything but POST with 405
/// 3. Validates the body, API key and type tag
/// 4. Forwards the payload to the resolved upstream and relays its JSON verbatim
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generation",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Upstream JSON response, relayed unchanged", body = Object),
        (status = 400, description = "Malformed body or unknown generation type", body = ErrorResponse),
        (status = 405, description = "Method other than POST or OPTIONS", body = ErrorResponse),
        (status = 500, description = "Missing API key or upstream failure", body = ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    // Pre-flight
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let start_time = Instant::now();

    let dispatch = prepare(&state.config, &method, body).map_err(|e| {
        warn!(method = %method, error = %e, "Rejected relay request");
        record_request("unknown", "error", start_time.elapsed().as_secs_f64());
        e
    })?;

    let label = dispatch.generation_type.as_str();
    let result = state.upstream.generate(dispatch.upstream_request()).await;
    let duration = start_time.elapsed().as_secs_f64();

    match result {
        Ok(value) => {
            record_request(label, "success", duration);
            info!(
                generation_type = %label,
                provider = %state.upstream.name(),
                duration_ms = %format!("{:.2}", duration * 1000.0),
                "Relay request completed"
            );
            Ok((StatusCode::OK, Json(value)).into_response())
        }
        Err(e) => {
            record_request(label, "error", duration);
            if let Some(kind) = e.upstream_kind() {
                record_upstream_error(label, kind);
            }
            error!(generation_type = %label, error = %e, "Server error");
            Err(e)
        }
    }
}
