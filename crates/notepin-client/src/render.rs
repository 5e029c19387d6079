//! Plain-text view of a board.

use std::fmt::Write;

use chrono::{DateTime, Local};

use notepin_core::Note;

use crate::{api::NotesApi, board::Board};

pub fn render<A: NotesApi>(board: &Board<A>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Note Pinner");

    let count = if board.has_notes() {
        format!("{} note(s)", board.notes().len())
    } else {
        "No notes yet.".to_string()
    };
    let loading = if board.is_loading() { "  Loading..." } else { "" };
    let _ = writeln!(out, "{count}{loading}");

    if let Some(err) = board.error() {
        let _ = writeln!(out, "! {err}");
    }

    for note in board.notes() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## {}  ({})", note.title, local_time(note));
        let _ = writeln!(out, "{}", note.content);
    }

    if !board.is_loading() && !board.has_notes() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Add your first note to fill this board.");
    }
    out
}

/// Creation time in the local timezone; the raw string if it doesn't parse.
fn local_time(note: &Note) -> String {
    DateTime::parse_from_rfc3339(&note.created_at)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| note.created_at.clone())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use notepin_core::{NewNote, NotepinError, Result};

    use super::*;

    struct Fixed(Vec<Note>);

    #[async_trait]
    impl NotesApi for Fixed {
        async fn fetch_notes(&self) -> Result<Vec<Note>> {
            Ok(self.0.clone())
        }
        async fn create_note(&self, _input: &NewNote) -> Result<Note> {
            Err(NotepinError::Http("read-only".into()))
        }
    }

    #[tokio::test]
    async fn renders_notes_and_count() {
        let mut note = Note::seed();
        note.created_at = "not a date".into();
        let mut board = Board::new(Fixed(vec![note]));
        assert!(render(&board).contains("Loading..."));

        board.load().await;
        let out = render(&board);
        assert!(out.contains("1 note(s)"));
        assert!(out.contains("## Welcome  (not a date)"));
        assert!(out.contains("Pin your ideas"));
        assert!(!out.contains("Loading..."));
    }

    #[tokio::test]
    async fn renders_empty_state_and_errors() {
        let mut board = Board::new(Fixed(vec![]));
        board.load().await;
        board.form_mut().title = "x".into();
        board.form_mut().content = "y".into();
        board.submit().await;

        let out = render(&board);
        assert!(out.contains("No notes yet."));
        assert!(out.contains("! read-only"));
        assert!(out.contains("Add your first note"));
    }
}
