//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define router metrics (requests, latency, resolutions, registry size)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `router_requests_total` (counter): requests by method, status
//! - `router_request_duration_seconds` (histogram): latency distribution
//! - `router_resolutions_total` (counter): outcome=found|not_found
//! - `router_registry_reloads_total` (counter): result=ok|error
//! - `router_registry_actions` (gauge): registered action count
//! - `router_cache_entries` (gauge): memoized resolutions

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter on `addr`. Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "router_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("router_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_resolution(found: bool) {
    let outcome = if found { "found" } else { "not_found" };
    counter!("router_resolutions_total", "outcome" => outcome).increment(1);
}

pub fn record_registry_reload(ok: bool) {
    let result = if ok { "ok" } else { "error" };
    counter!("router_registry_reloads_total", "result" => result).increment(1);
}

pub fn record_registry_size(actions: usize) {
    gauge!("router_registry_actions").set(actions as f64);
}

pub fn record_cache_size(entries: usize) {
    gauge!("router_cache_entries").set(entries as f64);
}
