//! Axum router wiring.
//!
//! Routes, the 404 fallback (also for unsupported methods on known paths),
//! request metrics, tracing and CORS.

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{app_state::AppState, notes, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(ops::healthz).fallback(ops::not_found))
        .route(
            "/notes",
            get(notes::list_notes)
                .post(notes::create_note)
                .fallback(ops::not_found),
        )
        .route("/metrics", get(ops::metrics).fallback(ops::not_found))
        .fallback(ops::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_requests,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
