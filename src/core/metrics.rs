//! Prometheus metrics for monitoring the relay server.
//!
//! This module provides a centralized metrics registry for tracking inbound
//! requests and the outcome of upstream generation calls.

use prometheus::{
    register_gauge_vec, register_histogram_vec, register_int_counter_vec, GaugeVec, HistogramVec,
    IntCounterVec,
};
use std::sync::OnceLock;

/// Container for all application metrics.
pub struct Metrics {
    /// Total number of requests by method, endpoint, and status
    pub request_count: IntCounterVec,

    /// Request duration histogram in seconds
    pub request_duration: HistogramVec,

    /// Number of currently active requests by endpoint
    pub active_requests: GaugeVec,

    /// Upstream generation calls by model and outcome
    pub upstream_requests: IntCounterVec,

    /// Upstream response latency histogram in seconds
    pub upstream_latency: HistogramVec,
}

static METRICS: OnceLock<Metrics> = OnceLock::new();

/// Initialize the metrics registry.
///
/// This should be called once at application startup. Subsequent calls will
/// return the same instance.
///
/// # Examples
///
/// ```no_run
/// use antigravity_relay::core::metrics::init_metrics;
///
/// let metrics = init_metrics();
/// metrics.request_count.with_label_values(&["GET", "/", "200"]).inc();
/// ```
pub fn init_metrics() -> &'static Metrics {
    METRICS.get_or_init(|| {
        let request_count = register_int_counter_vec!(
            "relay_requests_total",
            "Total number of requests",
            &["method", "endpoint", "status_code"]
        )
        .expect("Failed to register request_count metric");

        let request_duration = register_histogram_vec!(
            "relay_request_duration_seconds",
            "Request duration in seconds",
            &["method", "endpoint"],
            vec![0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0]
        )
        .expect("Failed to register request_duration metric");

        let active_requests = register_gauge_vec!(
            "relay_active_requests",
            "Number of active requests",
            &["endpoint"]
        )
        .expect("Failed to register active_requests metric");

        let upstream_requests = register_int_counter_vec!(
            "relay_upstream_requests_total",
            "Total number of upstream generation calls",
            &["model", "outcome"]
        )
        .expect("Failed to register upstream_requests metric");

        let upstream_latency = register_histogram_vec!(
            "relay_upstream_latency_seconds",
            "Upstream response latency in seconds",
            &["model"],
            vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 30.0]
        )
        .expect("Failed to register upstream_latency metric");

        Metrics {
            request_count,
            request_duration,
            active_requests,
            upstream_requests,
            upstream_latency,
        }
    })
}

/// Get the global metrics instance, initializing it on first use.
pub fn get_metrics() -> &'static Metrics {
    init_metrics()
}

/// Record the outcome of one upstream call.
pub fn record_upstream_outcome(model: &str, outcome: &str, latency_secs: f64) {
    let metrics = get_metrics();
    metrics
        .upstream_requests
        .with_label_values(&[model, outcome])
        .inc();
    metrics
        .upstream_latency
        .with_label_values(&[model])
        .observe(latency_secs);
}
