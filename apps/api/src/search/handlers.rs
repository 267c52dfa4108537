//! Axum route handlers for the Search API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::candidate::CandidateProfile;
use crate::search::catalog::{filter_catalog, SkillCategory};
use crate::search::engine::search;
use crate::search::execute;
use crate::search::params::{text_query, SearchParams};
use crate::search::suggest::suggest;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub candidates: Vec<CandidateProfile>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub active_filters: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillCatalogResponse {
    pub categories: Vec<SkillCategory>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/search
///
/// Every match as a bare JSON array, in store order. No paging.
pub async fn handle_legacy_search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<CandidateProfile>> {
    let request = SearchParams::from_pairs(pairs).into_request(state.config.page_size);
    let results: Vec<CandidateProfile> =
        search(state.store.candidates(), &request.query, &request.filters)
            .into_iter()
            .cloned()
            .collect();
    debug!("Legacy search '{}' matched {}", request.query, results.len());
    Json(results)
}

/// GET /api/v1/candidates
///
/// One page of matches plus totals and the active filter chips.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<SearchResponse> {
    let request = SearchParams::from_pairs(pairs).into_request(state.config.page_size);
    let page = execute(state.store.candidates(), &request);
    debug!(
        "Search '{}' matched {} (page {}/{})",
        request.query, page.total, page.page, page.page_count
    );

    Json(SearchResponse {
        candidates: page.items.into_iter().cloned().collect(),
        total: page.total,
        page: page.page,
        page_size: page.page_size,
        page_count: page.page_count,
        active_filters: request.filters.active_labels(),
    })
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CandidateProfile>, AppError> {
    state
        .store
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}

/// GET /api/v1/suggestions?q=
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<SuggestionsResponse> {
    let suggestions = suggest(state.store.candidates(), &text_query(pairs));
    Json(SuggestionsResponse { suggestions })
}

/// GET /api/v1/skills?q=
///
/// The filter panel's skill catalog, optionally narrowed by a search box.
pub async fn handle_skill_catalog(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<SkillCatalogResponse> {
    Json(SkillCatalogResponse {
        categories: filter_catalog(&text_query(pairs)),
    })
}
