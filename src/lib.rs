//! Building Registry Lookup Service Library
//!
//! Loads a semicolon-delimited export of the apartment building registry into
//! memory once and answers address searches and FIAS-code lookups over HTTP.
//! The binary (`main.rs`) wires these modules together.
//!
//! ## Modules
//!
//! - **`dataset`**: Parsing of the export and the memoized, immutable in-memory dataset.
//! - **`search`**: Case-insensitive substring search over addresses, ranked by length.
//! - **`lookup`**: Exact-match resolution of a `houseguid` into a detailed record.
//! - **`diagnostics`**: Load statistics and source-file presence.
//! - **`server`**: Axum router, error fallbacks and the listener loop.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: Loader and HTTP error types.

pub mod config;
pub mod dataset;
pub mod diagnostics;
pub mod error;
pub mod lookup;
pub mod search;
pub mod server;
