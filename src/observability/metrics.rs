//! Metrics collection and exposition.
//!
//! # Metrics
//! - `item_requests_total` (counter): requests by service, method, status
//! - `item_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - One `track_requests` middleware records both metrics for every
//!   request, on both daemons
//! - Labels carry the service name so one Prometheus scrape covers a
//!   co-located gateway + storage pair

use std::net::SocketAddr;
use std::time::Instant;

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter started"),
        Err(e) => tracing::error!(error = %e, "Failed to start metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(service: &'static str, method: &str, status: u16, start: Instant) {
    let labels = [
        ("service", service.to_string()),
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("item_requests_total", &labels).increment(1);
    metrics::histogram!("item_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Axum middleware recording request count and latency.
///
/// Attached via `axum::middleware::from_fn_with_state` with the service
/// name as state.
pub async fn track_requests(
    State(service): State<&'static str>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;

    record_request(service, &method, response.status().as_u16(), start);
    response
}
