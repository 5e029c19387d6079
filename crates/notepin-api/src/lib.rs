//! notepin API library entry.
//!
//! This crate wires the in-memory note store, the HTTP routes, and the
//! request metrics into a single axum router. It is consumed by the binary
//! (`main.rs`), by integration tests, and by the client's end-to-end tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod notes;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
