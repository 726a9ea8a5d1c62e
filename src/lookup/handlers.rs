use super::service::get_info;
use super::types::AddressInfo;
use crate::dataset::DatasetCache;
use crate::error::{ApiError, MSG_ADDRESS_NOT_FOUND};
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_get_address(
    path: Result<Path<String>, PathRejection>,
    Extension(cache): Extension<Arc<DatasetCache>>,
) -> Result<Json<AddressInfo>, ApiError> {
    // A segment that does not decode cannot name any record
    let Path(houseguid) = path.map_err(|e| {
        tracing::debug!(error = %e, "Rejected address path");
        ApiError::not_found(MSG_ADDRESS_NOT_FOUND)
    })?;

    let dataset = cache.get();

    match get_info(&dataset, &houseguid) {
        Some(info) => Ok(Json(info)),
        None => {
            tracing::debug!(houseguid = %houseguid, "Address not found");
            Err(ApiError::not_found(MSG_ADDRESS_NOT_FOUND))
        }
    }
}
