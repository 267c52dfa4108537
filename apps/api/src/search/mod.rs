// Talent search: query engine, suggestions, pagination and the HTTP adapter.
// The engine modules are pure; only `handlers` knows about axum or AppState.

pub mod catalog;
pub mod engine;
pub mod filters;
pub mod handlers;
pub mod ordering;
pub mod pagination;
pub mod params;
pub mod suggest;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::models::candidate::CandidateProfile;
use crate::search::filters::SearchFilters;
use crate::search::ordering::ResultOrder;
use crate::search::pagination::{paginate, Page};

/// Per-request search state: what the user typed, which facets are set,
/// where the pager is, and an optional session ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub filters: SearchFilters,
    pub page: usize,
    pub page_size: usize,
    /// Overrides the store's order for this request only.
    pub order: Option<ResultOrder>,
}

/// Arranges a view of the store, filters it, and cuts the requested page.
///
/// The order is applied before filtering so a seeded session keeps the same
/// relative order while filters change.
pub fn execute<'a>(
    records: &'a [CandidateProfile],
    request: &SearchRequest,
) -> Page<&'a CandidateProfile> {
    let matched = match request.order {
        Some(order) => {
            let mut view: Vec<&CandidateProfile> = records.iter().collect();
            order.arrange(&mut view);
            engine::search_iter(view, &request.query, &request.filters)
        }
        None => engine::search(records, &request.query, &request.filters),
    };
    paginate(&matched, request.page, request.page_size)
}
