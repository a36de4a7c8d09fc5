use std::sync::Arc;

use ama_db::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store handle
/// is the only long-lived shared resource; the driver handles its own
/// internal concurrency.
#[derive(Clone)]
pub struct AppState {
    /// Document store adapter; may be disconnected.
    pub store: Arc<DocumentStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
