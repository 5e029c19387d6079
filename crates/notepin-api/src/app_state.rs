//! Shared application state for the notepin API.
//!
//! The note store and the metrics registry are owned here and handed to
//! handlers through axum's `State` extractor; nothing is global.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::obs::metrics::HttpMetrics;
use crate::store::NoteStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ApiConfig,
    store: NoteStore,
    metrics: HttpMetrics,
}

impl AppState {
    /// Build state with a store holding the seed note.
    pub fn new(cfg: ApiConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store: NoteStore::seeded(),
                metrics: HttpMetrics::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &ApiConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &NoteStore {
        &self.inner.store
    }

    pub fn metrics(&self) -> &HttpMetrics {
        &self.inner.metrics
    }
}
