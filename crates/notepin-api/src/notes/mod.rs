//! Note endpoints: `GET /notes` and `POST /notes`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use notepin_core::{NewNote, Note, NotepinError};

use crate::{app_state::AppState, error::ApiError};

/// Body of `POST /notes`. Absent fields are reported as validation errors
/// rather than deserialization errors.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreateNoteRequest {
    pub fn validate(&self) -> Result<NewNote, NotepinError> {
        NewNote::from_parts(self.title.as_deref(), self.content.as_deref())
    }
}

pub async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    Json(state.store().list().await)
}

pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "note payload rejected");
        NotepinError::missing_fields()
    })?;

    let input = req.validate().inspect_err(|e| {
        tracing::debug!(error = %e, "note validation failed");
    })?;

    let note = state.store().append(input).await;
    tracing::info!(id = %note.id, "note created");

    Ok((StatusCode::CREATED, Json(note)))
}
