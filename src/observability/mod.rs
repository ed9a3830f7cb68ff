//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http, registry reloads, admin:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging for machine parsing
//! - Request ID flows through every log line of a request
//! - Metrics are cheap (atomic increments), recorded even when no exporter runs
//! - The routing core itself emits nothing; its callers do

pub mod logging;
pub mod metrics;
