//! Lightweight in-process metrics.
//!
//! Counters and histograms are stored as atomics keyed by label sets and
//! rendered by the `/metrics` handler. The request middleware feeds them.

pub mod metrics;
pub mod middleware;
