//! Liveness and store-diagnostic routes.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::truncate_error;
use crate::state::AppState;

/// Cap on driver error text embedded in the `database` status string.
const MAX_PROBE_ERROR_CHARS: usize = 80;

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

/// GET / — liveness marker.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "AMA API running",
    })
}

/// Diagnostic payload for `GET /test`.
#[derive(Serialize)]
struct StoreDiagnostics {
    backend: &'static str,
    database: String,
    database_url: &'static str,
    database_name: &'static str,
    connection_status: &'static str,
    collections: Vec<String>,
}

/// GET /test — probe store reachability and list collection names.
///
/// Never fails the request: every store error is downgraded into the
/// `database` status string and the response is always 200.
async fn store_diagnostics(State(state): State<AppState>) -> Json<StoreDiagnostics> {
    let mut diagnostics = StoreDiagnostics {
        backend: "running",
        database: "not configured".to_string(),
        database_url: set_marker(state.config.database_url.is_some()),
        database_name: set_marker(state.config.database_name.is_some()),
        connection_status: "not connected",
        collections: Vec::new(),
    };

    if state.store.is_connected() {
        diagnostics.connection_status = "connected";
        match state.store.collection_names().await {
            Ok(names) => {
                diagnostics.collections = names;
                diagnostics.database = "connected".to_string();
            }
            Err(err) => {
                diagnostics.database = format!(
                    "configured but not reachable: {}",
                    truncate_error(&err.to_string(), MAX_PROBE_ERROR_CHARS)
                );
            }
        }
    }

    Json(diagnostics)
}

fn set_marker(set: bool) -> &'static str {
    if set {
        "set"
    } else {
        "not set"
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(store_diagnostics))
}
