//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format
//! - fallback   : 404 for everything else

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use notepin_core::NotepinError;

use crate::{app_state::AppState, error::ApiError, obs::metrics::Gauge};

/// Content type of the text exposition format.
pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let stored = state.store().len().await;
    let body = state.metrics().render(&[Gauge {
        name: "notepin_notes_stored",
        help: "Number of notes held in memory",
        value: stored as f64,
    }]);

    (StatusCode::OK, [(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)], body).into_response()
}

pub async fn not_found() -> ApiError {
    ApiError(NotepinError::NotFound)
}
