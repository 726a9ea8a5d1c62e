use super::loader::load;
use super::types::Dataset;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// Memoizing accessor for the registry dataset.
///
/// The export is read at most once per cache; every caller receives the same
/// `Arc<Dataset>` afterwards. There is no invalidation: picking up a new
/// export requires a restart.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    dataset: OnceLock<Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dataset: OnceLock::new(),
        }
    }

    /// Builds a cache that is already populated with `dataset`.
    pub fn with_dataset(path: impl Into<PathBuf>, dataset: Dataset) -> Self {
        let cache = Self::new(path);
        let _ = cache.dataset.set(Arc::new(dataset));
        cache
    }

    /// Returns the dataset, loading it from disk on first access.
    pub fn get(&self) -> Arc<Dataset> {
        Arc::clone(self.dataset.get_or_init(|| Arc::new(load(&self.path))))
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    /// Whether the export exists on disk right now, regardless of what was
    /// loaded.
    pub fn source_exists(&self) -> bool {
        self.path.exists()
    }
}
