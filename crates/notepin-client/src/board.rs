//! Client view state.
//!
//! A `Board` holds the notes shown to the user, the form being edited, and
//! the flags driving the view. `load` and `submit` each follow the same shape:
//! reset the error slot, call the API, fold the outcome into the state, and
//! clear the in-flight flag whatever happened.

use notepin_core::{NewNote, Note, NotepinError};

use crate::api::NotesApi;

pub const LOAD_FAILED: &str = "Could not load notes.";
pub const SAVE_FAILED: &str = "Could not save the note.";
pub const FORM_INCOMPLETE: &str = "Please provide a title and content.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}

pub struct Board<A> {
    api: A,
    notes: Vec<Note>,
    form: NoteForm,
    is_loading: bool,
    is_submitting: bool,
    error: Option<String>,
}

impl<A: NotesApi> Board<A> {
    /// A fresh board is loading until the first `load` completes.
    pub fn new(api: A) -> Self {
        Self {
            api,
            notes: Vec::new(),
            form: NoteForm::default(),
            is_loading: true,
            is_submitting: false,
            error: None,
        }
    }

    /// Fetch the full list and replace the local one.
    pub async fn load(&mut self) {
        self.error = None;
        match self.api.fetch_notes().await {
            Ok(notes) => self.notes = notes,
            Err(e) => {
                tracing::warn!(error = %e, "loading notes failed");
                self.error = Some(user_message(&e, LOAD_FAILED));
            }
        }
        self.is_loading = false;
    }

    /// Create a note from the form. Returns the created note, if any.
    ///
    /// Incomplete forms are refused before any request is sent. On success the
    /// server's note is prepended locally and the form is cleared.
    pub async fn submit(&mut self) -> Option<Note> {
        let Ok(input) = NewNote::parse(&self.form.title, &self.form.content) else {
            self.error = Some(FORM_INCOMPLETE.to_string());
            return None;
        };

        self.is_submitting = true;
        self.error = None;

        let created = match self.api.create_note(&input).await {
            Ok(note) => {
                self.notes.insert(0, note.clone());
                self.form = NoteForm::default();
                Some(note)
            }
            Err(e) => {
                tracing::warn!(error = %e, "saving note failed");
                self.error = Some(user_message(&e, SAVE_FAILED));
                None
            }
        };

        self.is_submitting = false;
        created
    }

    pub fn form_mut(&mut self) -> &mut NoteForm {
        &mut self.form
    }

    pub fn form(&self) -> &NoteForm {
        &self.form
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

fn user_message(e: &NotepinError, fallback: &str) -> String {
    let msg = e.to_string();
    if msg.trim().is_empty() {
        fallback.to_string()
    } else {
        msg
    }
}
