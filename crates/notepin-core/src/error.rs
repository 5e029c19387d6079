//! Shared error type across notepin crates.

use thiserror::Error;

/// Message returned to API clients when a note is missing its title or content.
pub const MISSING_FIELDS: &str = "title and content are required";

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Missing or malformed note fields.
    Validation,
    /// Unknown route.
    NotFound,
    /// Invalid configuration.
    Config,
    /// Transport failure or non-success response seen by the client.
    Http,
}

impl ClientCode {
    /// String representation used in logs and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Validation => "VALIDATION",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Config => "CONFIG",
            ClientCode::Http => "HTTP",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NotepinError>;

/// Unified error type used by core, api and client.
#[derive(Debug, Error)]
pub enum NotepinError {
    #[error("{0}")]
    Validation(String),
    #[error("not found")]
    NotFound,
    #[error("invalid config: {0}")]
    Config(String),
    #[error("{0}")]
    Http(String),
}

impl NotepinError {
    /// Validation failure for a note without title or content.
    pub fn missing_fields() -> Self {
        NotepinError::Validation(MISSING_FIELDS.to_string())
    }

    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            NotepinError::Validation(_) => ClientCode::Validation,
            NotepinError::NotFound => ClientCode::NotFound,
            NotepinError::Config(_) => ClientCode::Config,
            NotepinError::Http(_) => ClientCode::Http,
        }
    }
}
