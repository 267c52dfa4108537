use std::sync::Arc;

use crate::config::Config;
use crate::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup and never mutated.
    pub store: Arc<CandidateStore>,
    pub config: Config,
}
