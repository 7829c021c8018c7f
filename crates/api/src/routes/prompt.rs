//! Route definitions for prompts, moderation, and votes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{prompt, vote};
use crate::state::AppState;

/// Routes mounted at `/prompts`.
///
/// ```text
/// GET  /               -> list_approved (public)
/// POST /               -> submit (requires auth)
/// GET  /pending        -> list_pending (admin only)
/// POST /{id}/approve   -> approve (admin only)
/// POST /{id}/reject    -> reject (admin only)
/// GET  /{id}/rating    -> rating_summary (public)
/// GET  /{id}/vote      -> my_vote (requires auth)
/// PUT  /{id}/vote      -> cast_vote (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prompt::list_approved).post(prompt::submit))
        .route("/pending", get(prompt::list_pending))
        .route("/{id}/approve", post(prompt::approve))
        .route("/{id}/reject", post(prompt::reject))
        .route("/{id}/rating", get(vote::rating_summary))
        .route("/{id}/vote", get(vote::my_vote).put(vote::cast_vote))
}
