//! Document store access for the AMA backend.
//!
//! Exposes a thin adapter over MongoDB ([`store::DocumentStore`]), the typed
//! content models that form the validation boundary between raw stored
//! documents and the API surface ([`models`]), and per-entity repositories
//! ([`repositories`]).

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::{DbError, StoreError};
pub use store::DocumentStore;
