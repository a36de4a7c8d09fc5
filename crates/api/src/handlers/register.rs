//! Handler for the registration endpoint.

use ama_core::error::CoreError;
use ama_db::models::CreateRegistration;
use ama_db::repositories::RegistrationRepo;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use crate::error::{truncate_error, AppError, AppResult};
use crate::state::AppState;

/// Cap on store error text returned in a failed-registration response.
const MAX_ERROR_CHARS: usize = 200;

/// Response for a successfully received registration.
#[derive(Debug, Serialize)]
pub struct RegistrationCreated {
    pub id: String,
    pub status: &'static str,
}

/// POST /api/register
///
/// The body is validated before any store access; a rejected body never
/// produces a store write. A failed insert comes back as a 500 carrying the
/// truncated failure text.
pub async fn create_registration(
    State(state): State<AppState>,
    Json(payload): Json<CreateRegistration>,
) -> AppResult<Json<RegistrationCreated>> {
    payload
        .validate()
        .map_err(|err| CoreError::Validation(err.to_string()))?;

    let id = RegistrationRepo::insert(&state.store, &payload)
        .await
        .map_err(|err| AppError::Internal(truncate_error(&err.to_string(), MAX_ERROR_CHARS)))?;

    Ok(Json(RegistrationCreated {
        id,
        status: "received",
    }))
}
