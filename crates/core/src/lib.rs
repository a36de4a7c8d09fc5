//! Shared building blocks for the AMA backend.
//!
//! Holds the error taxonomy and type aliases used by both the store layer
//! (`ama-db`) and the HTTP layer (`ama-api`).

pub mod error;
pub mod types;
