//! Search Data Types
//!
//! Request parameters and response DTOs for the `/search` endpoint.

use serde::{Deserialize, Serialize};

/// Query string of `/search`. A missing `q` is treated as an empty query.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: String,
}

impl SearchParams {
    /// Builds the parameters from decoded query pairs. When `q` is repeated
    /// the first occurrence wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { q }
    }
}

/// One summary row of a search listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    /// Full address as stored in the registry.
    pub address: String,
    /// FIAS code, or an empty string when the record has none.
    pub houseguid: String,
    /// Address cut to a display-friendly length.
    pub short: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}
