//! In-process observability: request counters and Prometheus-style metrics.
//!
//! Both are stored as atomics behind `DashMap`s and are updated by the request
//! pipeline, then read by `/statistiche` and `/metrics`.

pub mod counters;
pub mod metrics;

pub use counters::{CountersSnapshot, RequestCounters, TRACKED_METHODS};
pub use metrics::ServerMetrics;
