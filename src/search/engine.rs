use super::types::SearchResult;
use crate::dataset::Dataset;

/// Queries shorter than this (after trimming) are not scanned.
pub const MIN_QUERY_CHARS: usize = 2;
/// Upper bound on the number of results returned.
pub const MAX_RESULTS: usize = 50;
/// Length of the `short` form before the ellipsis is appended.
pub const SHORT_MAX_CHARS: usize = 100;
pub const ELLIPSIS: &str = "...";

/// Case-insensitive substring search over record addresses.
///
/// Matches are ordered by full address length, shortest first; equal lengths
/// keep file order. At most [`MAX_RESULTS`] entries are returned.
pub fn search(dataset: &Dataset, query: &str) -> Vec<SearchResult> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    let mut results: Vec<SearchResult> = dataset
        .iter()
        .filter_map(|record| {
            let address = record.address.as_deref()?;
            if !address.to_lowercase().contains(&needle) {
                return None;
            }
            Some(SearchResult {
                address: address.to_string(),
                houseguid: record.houseguid.clone().unwrap_or_default(),
                short: shorten(address),
            })
        })
        .collect();

    // sort_by_key is stable
    results.sort_by_key(|r| r.address.chars().count());
    results.truncate(MAX_RESULTS);
    results
}

/// Cuts `address` to [`SHORT_MAX_CHARS`] characters, marking the cut with
/// [`ELLIPSIS`].
pub fn shorten(address: &str) -> String {
    match address.char_indices().nth(SHORT_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &address[..cut], ELLIPSIS),
        None => address.to_string(),
    }
}
