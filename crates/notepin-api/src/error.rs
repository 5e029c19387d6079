//! HTTP mapping for the shared error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use notepin_core::NotepinError;

/// Error returned by handlers; renders as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub NotepinError);

impl From<NotepinError> for ApiError {
    fn from(e: NotepinError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            NotepinError::Validation(_) => StatusCode::BAD_REQUEST,
            NotepinError::NotFound => StatusCode::NOT_FOUND,
            NotepinError::Config(_) | NotepinError::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
