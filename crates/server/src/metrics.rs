//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the kiosk server:
//! - HTTP request metrics (latency, counts, in flight)
//! - Ticket submissions and rejections
//! - Printer invocations (registered from the core crate)

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "dms_storage_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("dms_storage_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "dms_storage_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Ticket Metrics
// =============================================================================

/// Tickets printed and returned to the client.
pub static TICKETS_SUBMITTED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "dms_storage_tickets_submitted_total",
        "Total tickets printed since startup",
    )
    .unwrap()
});

/// Ticket submissions that ended in an error response.
pub static TICKETS_REJECTED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "dms_storage_tickets_rejected_total",
            "Ticket submissions answered with an error",
        ),
        &["reason"], // "malformed_request", "decode_error", "print_error"
    )
    .unwrap()
});

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Tickets
    registry
        .register(Box::new(TICKETS_SUBMITTED_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(TICKETS_REJECTED_TOTAL.clone()))
        .unwrap();

    // Core metrics (printer)
    for metric in storage_ticket_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Path label for metrics. Static file paths are collapsed into one label
/// so arbitrary URLs cannot blow up label cardinality.
pub fn metric_path(path: &str) -> &'static str {
    match path.trim_end_matches('/') {
        "/ticketApi" => "/ticketApi/",
        "/health" => "/health",
        "/config" => "/config",
        "/metrics" => "/metrics",
        _ => "static",
    }
}
