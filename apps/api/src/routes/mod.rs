pub mod health;

use axum::{routing::get, Router};

use crate::search::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Legacy array-shaped search used by the first search page
        .route("/api/search", get(handlers::handle_legacy_search))
        // Search API
        .route("/api/v1/candidates", get(handlers::handle_search))
        .route("/api/v1/candidates/:id", get(handlers::handle_get_candidate))
        .route("/api/v1/suggestions", get(handlers::handle_suggestions))
        .route("/api/v1/skills", get(handlers::handle_skill_catalog))
        .with_state(state)
}
