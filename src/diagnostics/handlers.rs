use super::service::stats;
use super::types::Stats;
use crate::dataset::DatasetCache;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_stats(Extension(cache): Extension<Arc<DatasetCache>>) -> Json<Stats> {
    Json(stats(&cache))
}
