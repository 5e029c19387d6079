//! HTTP access to the notes API.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use notepin_core::{NewNote, Note, NotepinError, Result};

/// Shown when an error response body is not JSON.
pub const SERVER_ERROR_FALLBACK: &str = "An error occurred on the server.";
/// Shown when an error response carries neither a message nor a reason phrase.
pub const REQUEST_FAILED: &str = "Request failed";

/// What the board needs from the server. Implemented over HTTP, faked in tests.
#[async_trait]
pub trait NotesApi: Send + Sync {
    async fn fetch_notes(&self) -> Result<Vec<Note>>;
    async fn create_note(&self, input: &NewNote) -> Result<Note>;
}

#[derive(Serialize)]
struct CreateNotePayload<'a> {
    title: &'a str,
    content: &'a str,
}

pub struct HttpNotesApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpNotesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn fetch_notes(&self) -> Result<Vec<Note>> {
        let res = self
            .http
            .get(self.notes_url())
            .send()
            .await
            .map_err(transport_error)?;
        handle_response(res).await
    }

    async fn create_note(&self, input: &NewNote) -> Result<Note> {
        let payload = CreateNotePayload {
            title: input.title(),
            content: input.content(),
        };
        let res = self
            .http
            .post(self.notes_url())
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;
        handle_response(res).await
    }
}

fn transport_error(e: reqwest::Error) -> NotepinError {
    tracing::debug!(error = %e, "request failed");
    NotepinError::Http(e.to_string())
}

async fn handle_response<T: DeserializeOwned>(res: reqwest::Response) -> Result<T> {
    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.ok();
        return Err(NotepinError::Http(error_message(status, body.as_deref())));
    }
    res.json::<T>()
        .await
        .map_err(|e| NotepinError::Http(format!("invalid response: {e}")))
}

/// User-facing message for a non-success response.
///
/// Prefers the body's `error` string, then the status reason phrase.
pub fn error_message(status: StatusCode, body: Option<&str>) -> String {
    let Some(json) = body.and_then(|b| serde_json::from_str::<Value>(b).ok()) else {
        return SERVER_ERROR_FALLBACK.to_string();
    };
    json.get("error")
        .and_then(Value::as_str)
        .or_else(|| status.canonical_reason())
        .filter(|m| !m.is_empty())
        .unwrap_or(REQUEST_FAILED)
        .to_string()
}
