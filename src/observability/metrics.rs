//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_requests_total` (counter): requests by method, dispatch outcome
//! - `router_request_duration_seconds` (histogram): dispatch latency by outcome
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Prometheus exporter is opt-in via `observability.metrics_enabled`
//! - The method label is limited to the standard methods plus `other`, so
//!   arbitrary client methods cannot grow the series count

use std::net::SocketAddr;
use std::time::Instant;

use ::metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::routing::DispatchOutcome;

pub const REQUESTS_TOTAL: &str = "router_requests_total";
pub const REQUEST_DURATION: &str = "router_request_duration_seconds";

/// Install the Prometheus recorder and its HTTP scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!(REQUESTS_TOTAL, "Requests seen by the dispatcher");
    describe_histogram!(REQUEST_DURATION, "Time spent dispatching a request");

    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Label value for a request method.
pub fn method_label(method: &str) -> &'static str {
    match method {
        "GET" => "GET",
        "HEAD" => "HEAD",
        "POST" => "POST",
        "PUT" => "PUT",
        "DELETE" => "DELETE",
        "CONNECT" => "CONNECT",
        "OPTIONS" => "OPTIONS",
        "TRACE" => "TRACE",
        "PATCH" => "PATCH",
        _ => "other",
    }
}

/// Record one dispatched request.
pub fn record_request(method: &str, outcome: DispatchOutcome, start: Instant) {
    counter!(
        REQUESTS_TOTAL,
        "method" => method_label(method),
        "outcome" => outcome.as_str()
    )
    .increment(1);

    histogram!(REQUEST_DURATION, "outcome" => outcome.as_str())
        .record(start.elapsed().as_secs_f64());
}
