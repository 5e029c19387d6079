//! Note record and the validated input used to create one.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{NotepinError, Result};

/// Id of the note present at process start.
pub const SEED_ID: &str = "seed-1";

/// A pinned note. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Opaque, unique within the process lifetime.
    pub id: String,
    pub title: String,
    pub content: String,
    /// RFC 3339 UTC timestamp, millisecond precision.
    pub created_at: String,
}

impl Note {
    /// Build a note from validated input with a fresh id and the current time.
    pub fn create(input: NewNote) -> Self {
        Self {
            id: format!("note-{}", Uuid::new_v4()),
            title: input.title,
            content: input.content,
            created_at: timestamp(Utc::now()),
        }
    }

    /// The hardcoded note every store starts with.
    pub fn seed() -> Self {
        Self {
            id: SEED_ID.to_string(),
            title: "Welcome".to_string(),
            content: "Pin your ideas and read them again later.".to_string(),
            created_at: timestamp(Utc::now()),
        }
    }
}

/// Title and content that passed validation (both non-empty once trimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    title: String,
    content: String,
}

impl NewNote {
    /// Trim both fields and reject the pair if either ends up empty.
    pub fn parse(title: &str, content: &str) -> Result<Self> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(NotepinError::missing_fields());
        }
        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    /// Same as [`NewNote::parse`], treating an absent field as empty.
    pub fn from_parts(title: Option<&str>, content: Option<&str>) -> Result<Self> {
        Self::parse(title.unwrap_or_default(), content.unwrap_or_default())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
