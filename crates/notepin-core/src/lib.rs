//! notepin core: the note model, validated input, and the shared error type.
//!
//! This crate holds the contracts shared by the API service and the client.
//! It carries no transport or runtime dependencies so both sides can agree on
//! the wire shape of a note without pulling in axum or reqwest.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Invalid input surfaces as `NotepinError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod note;

/// Shared result type.
pub use error::{Result, NotepinError};
pub use note::{NewNote, Note};
