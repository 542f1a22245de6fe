//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "genrelay_requests_total",
        "Total number of relay requests processed"
    );
    metrics::describe_histogram!(
        "genrelay_request_duration_seconds",
        "Relay request duration in seconds"
    );
    metrics::describe_counter!(
        "genrelay_upstream_errors_total",
        "Upstream failures by kind (status, transport)"
    );
}

/// Prometheus metrics endpoint handler
///
/// Returns metrics in Prometheus text format for scraping.
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a relay request
pub fn record_request(generation_type: &str, status: &str, duration_secs: f64) {
    metrics::counter!(
        "genrelay_requests_total",
        "type" => generation_type.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("genrelay_request_duration_seconds", "type" => generation_type.to_string())
        .record(duration_secs);
}

/// Record an upstream failure
pub fn record_upstream_error(generation_type: &str, kind: &str) {
    metrics::counter!(
        "genrelay_upstream_errors_total",
        "type" => generation_type.to_string(),
        "kind" => kind.to_string()
    )
    .increment(1);
}
