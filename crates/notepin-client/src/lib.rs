//! notepin client: talks to the notes API and keeps the view state.
//!
//! - `api`    : `NotesApi` seam and its reqwest implementation
//! - `board`  : load/submit state machine (notes, form, flags, error slot)
//! - `render` : plain-text rendering of a board
//! - `config` : API base URL resolution

pub mod api;
pub mod board;
pub mod config;
pub mod render;

pub use api::{HttpNotesApi, NotesApi};
pub use board::{Board, NoteForm};
pub use config::ClientConfig;
