pub mod auth;
pub mod health;
pub mod prompt;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register           register (public)
/// /auth/login              login (public)
///
/// /prompts                 list approved (public), submit (auth, POST)
/// /prompts/pending         moderation queue (admin only)
/// /prompts/{id}/approve    approve (admin only, POST)
/// /prompts/{id}/reject     reject (admin only, POST)
/// /prompts/{id}/rating     aggregate rating (public)
/// /prompts/{id}/vote       caller's vote (auth, GET), cast vote (auth, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Account registration and login.
        .nest("/auth", auth::router())
        // Prompt browsing, submission, moderation, and votes.
        .nest("/prompts", prompt::router())
}
