//! Dataset Module
//!
//! Owns the in-memory copy of the building registry export.
//!
//! ## Lifecycle
//! 1. **Load**: The semicolon-delimited export is read once (UTF-8, BOM tolerated).
//! 2. **Normalize**: Blank cells become absent values; known columns land in typed fields.
//! 3. **Share**: `DatasetCache` hands the same immutable `Arc<Dataset>` to every reader.
//!
//! A missing or unreadable export degrades to an empty dataset instead of failing startup.

pub mod cache;
pub mod loader;
pub mod types;

pub use cache::DatasetCache;
pub use types::{Dataset, Record};
