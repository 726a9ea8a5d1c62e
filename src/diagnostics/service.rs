use super::types::Stats;
use crate::dataset::DatasetCache;

pub fn stats(cache: &DatasetCache) -> Stats {
    let total_records = cache.get().len();

    Stats {
        total_records,
        has_data: total_records > 0,
        file_exists: cache.source_exists(),
    }
}
