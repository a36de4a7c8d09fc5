//! Handlers for the public content endpoints.
//!
//! Every handler is a single linear pipeline: fetch → strip id → validate →
//! sort → serialize. A store failure or a malformed stored document fails
//! that single request with a structured 500.

use ama_db::models::{Event, Faq, Leader, Program, Testimonial};
use ama_db::repositories::{EventRepo, FaqRepo, LeaderRepo, ProgramRepo, TestimonialRepo};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /api/events`.
#[derive(Debug, Deserialize)]
pub struct EventQuery {
    /// Restrict to events whose `program_slug` equals this value.
    pub program: Option<String>,
}

/// GET /api/programs
///
/// All programs, sorted ascending by display order.
pub async fn list_programs(State(state): State<AppState>) -> AppResult<Json<Vec<Program>>> {
    let programs = ProgramRepo::list_all(&state.store).await?;
    Ok(Json(programs))
}

/// GET /api/events
///
/// All events, or only those of one program, sorted ascending by start time.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventQuery>,
) -> AppResult<Json<Vec<Event>>> {
    let events = EventRepo::list(&state.store, params.program.as_deref()).await?;
    Ok(Json(events))
}

/// GET /api/leaders
pub async fn list_leaders(State(state): State<AppState>) -> AppResult<Json<Vec<Leader>>> {
    let leaders = LeaderRepo::list_all(&state.store).await?;
    Ok(Json(leaders))
}

/// GET /api/testimonials
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = TestimonialRepo::list_all(&state.store).await?;
    Ok(Json(testimonials))
}

/// GET /api/faq
pub async fn list_faq(State(state): State<AppState>) -> AppResult<Json<Vec<Faq>>> {
    let faq = FaqRepo::list_all(&state.store).await?;
    Ok(Json(faq))
}
