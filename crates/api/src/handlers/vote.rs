//! Handlers for star-rating votes and rating summaries.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use prompthub_core::error::CoreError;
use prompthub_core::rating::{validate_star, RATING_NONE};
use prompthub_core::types::DbId;
use prompthub_db::repositories::VoteRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::prompt::ensure_prompt_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /prompts/{id}/vote`.
#[derive(Debug, Deserialize)]
pub struct CastVoteRequest {
    /// The star the user clicked, `1..=5`.
    pub star: i16,
}

/// The caller's current rating for one prompt.
#[derive(Debug, Serialize)]
pub struct UserVoteResponse {
    pub prompt_id: DbId,
    /// Stored rating, or 0 when the user has no effective vote.
    pub rating: i16,
}

/// PUT /api/v1/prompts/{id}/vote
///
/// Cast a star click. Clicking the star matching the caller's current
/// rating clears the vote; any other star overwrites it. Returns the
/// resulting vote row.
pub async fn cast_vote(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(prompt_id): Path<DbId>,
    Json(input): Json<CastVoteRequest>,
) -> AppResult<impl IntoResponse> {
    validate_star(input.star).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    ensure_prompt_exists(&state.pool, prompt_id).await?;

    let vote = VoteRepo::cast(&state.pool, prompt_id, auth.user_id, input.star).await?;

    tracing::info!(
        user_id = auth.user_id,
        prompt_id = prompt_id,
        clicked = input.star,
        rating = vote.rating,
        "Vote cast"
    );

    Ok(Json(DataResponse { data: vote }))
}

/// GET /api/v1/prompts/{id}/vote
///
/// The caller's current rating for the prompt; 0 when they have not voted
/// (or have toggled their vote off).
pub async fn my_vote(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(prompt_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rating = VoteRepo::find_user_rating(&state.pool, prompt_id, auth.user_id)
        .await?
        .unwrap_or(RATING_NONE);

    Ok(Json(DataResponse {
        data: UserVoteResponse { prompt_id, rating },
    }))
}

/// GET /api/v1/prompts/{id}/rating
///
/// Aggregate rating for a prompt (average and count over effective votes).
/// Public; a prompt nobody has rated reports `{average: 0.0, count: 0}`.
pub async fn rating_summary(
    State(state): State<AppState>,
    Path(prompt_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let summary = VoteRepo::summary(&state.pool, prompt_id).await?;
    Ok(Json(DataResponse { data: summary }))
}
