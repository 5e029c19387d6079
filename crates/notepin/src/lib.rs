//! Top-level facade crate for notepin.
//!
//! Re-exports the core model, the API service and the client so users can
//! depend on a single crate.

pub mod core {
    pub use notepin_core::*;
}

pub mod api {
    pub use notepin_api::*;
}

pub mod client {
    pub use notepin_client::*;
}
