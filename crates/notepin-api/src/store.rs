//! In-memory note store.
//!
//! Notes live in a `VecDeque` ordered newest first. Nothing is ever removed;
//! the store lives as long as the process.

use std::collections::VecDeque;

use tokio::sync::RwLock;

use notepin_core::{NewNote, Note};

#[derive(Default)]
pub struct NoteStore {
    notes: RwLock<VecDeque<Note>>,
}

impl NoteStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding only the seed note.
    pub fn seeded() -> Self {
        Self {
            notes: RwLock::new(VecDeque::from([Note::seed()])),
        }
    }

    /// Snapshot of every note, newest first.
    pub async fn list(&self) -> Vec<Note> {
        self.notes.read().await.iter().cloned().collect()
    }

    /// Create a note from validated input and put it at the head.
    pub async fn append(&self, input: NewNote) -> Note {
        let note = Note::create(input);
        self.notes.write().await.push_front(note.clone());
        note
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}
