//! Diagnostics Module
//!
//! Reports how much of the registry is loaded and whether the source export is
//! present on disk. This is the only place a missing or unreadable export is
//! visible to clients.

pub mod handlers;
pub mod service;
pub mod types;
