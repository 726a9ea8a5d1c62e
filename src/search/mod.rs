//! Search Service Module
//!
//! Free-text address search over the loaded registry.
//!
//! ## Pipeline
//! - **Normalization**: The query is trimmed and lower-cased; queries under two characters are rejected.
//! - **Matching**: Every record whose address contains the query (case-insensitive) is a hit.
//! - **Ranking**: Hits are ordered by address length, shortest first, file order breaking ties.
//! - **Capping**: At most 50 hits are returned.
//!
//! ## Submodules
//! - **`engine`**: The scan, shaping and ranking logic.
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
