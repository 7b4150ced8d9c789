use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::MatchEngine;
use crate::store::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Job posting store. Postgres in production, in-memory for tests and
    /// DB-less dev runs.
    pub store: Arc<dyn JobStore>,
    /// Match engine: lexicon plus the corpus index (the one piece of shared
    /// mutable state, snapshot-swapped on job ingestion).
    pub engine: Arc<MatchEngine>,
    /// Kept on state so handlers that grow config knobs can reach it.
    #[allow(dead_code)]
    pub config: Config,
}
