use serde::{Deserialize, Serialize};

/// Snapshot returned by `/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    /// Number of records held in memory.
    pub total_records: usize,
    pub has_data: bool,
    /// Whether the export is on disk at the time of the request. May disagree
    /// with `has_data` if the file changed after startup.
    pub file_exists: bool,
}
