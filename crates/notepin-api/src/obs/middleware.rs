//! Per-request instrumentation.
//!
//! Wraps every request, unknown routes included, and records the
//! `method`/`route`/`status` counter and duration histogram once the response
//! is ready. The response itself is passed through untouched.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().as_str().to_owned();
    // the fallback has no matched path
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let started = Instant::now();

    let res = next.run(req).await;

    let status = res.status().as_u16().to_string();
    let elapsed = started.elapsed();
    state.metrics().record(&method, &route, &status, elapsed);
    tracing::debug!(%method, %route, %status, elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX), "request done");

    res
}
