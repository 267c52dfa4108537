use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status along with what the record store loaded.
/// An empty store reports "degraded": search still answers, just with nothing.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let status = if state.store.is_empty() { "degraded" } else { "ok" };
    Json(json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "service": "hall-api",
        "candidates": state.store.len(),
        "source": state.store.source(),
        "loaded_at": state.store.loaded_at(),
    }))
}
