use super::engine::search;
use super::types::{SearchParams, SearchResponse};
use crate::dataset::DatasetCache;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

/// Never rejects: an unreadable query string searches for nothing.
pub async fn handle_search(
    query: Option<Query<Vec<(String, String)>>>,
    Extension(cache): Extension<Arc<DatasetCache>>,
) -> Json<SearchResponse> {
    let params = query
        .map(|Query(pairs)| SearchParams::from_pairs(pairs))
        .unwrap_or_default();

    let dataset = cache.get();
    let results = search(&dataset, &params.q);

    tracing::debug!(query = %params.q, count = results.len(), "Search completed");

    Json(SearchResponse { results })
}
