//! Lookup Service Module
//!
//! Resolves a FIAS code (`houseguid`) to the full description of one building.
//! Fields missing from the registry are reported with a fixed placeholder, and
//! a miss surfaces as a 404 at the HTTP boundary.

pub mod handlers;
pub mod service;
pub mod types;
