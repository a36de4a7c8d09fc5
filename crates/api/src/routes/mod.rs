//! Route definitions.
//!
//! ```text
//! /                      liveness marker
//! /test                  store diagnostics (always 200)
//!
//! /api/programs          list programs, sorted by display order
//! /api/events            list events, optional ?program= filter, sorted by start
//! /api/leaders           list leaders
//! /api/testimonials      list testimonials
//! /api/faq               list FAQ entries
//! /api/register          create a registration (POST)
//! ```

pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{content, register};
use crate::state::AppState;

/// Build the `/api` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/programs", get(content::list_programs))
        .route("/events", get(content::list_events))
        .route("/leaders", get(content::list_leaders))
        .route("/testimonials", get(content::list_testimonials))
        .route("/faq", get(content::list_faq))
        .route("/register", post(register::create_registration))
}
