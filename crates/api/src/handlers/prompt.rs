//! Handlers for prompt submission, browsing, and moderation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use prompthub_core::error::CoreError;
use prompthub_core::moderation::{STATUS_APPROVED, STATUS_PENDING, STATUS_REJECTED};
use prompthub_core::submission::validate_submission;
use prompthub_core::types::DbId;
use prompthub_db::models::prompt::{CreatePrompt, Prompt};
use prompthub_db::repositories::PromptRepo;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /prompts`.
#[derive(Debug, Deserialize)]
pub struct SubmitPromptRequest {
    pub title: String,
    pub prompt_text: String,
    pub category: String,
}

/// Return `Ok(())` if the prompt exists, `NotFound` otherwise.
///
/// Shared with the vote handlers, which must not upsert against a
/// non-existent prompt id.
pub async fn ensure_prompt_exists(pool: &PgPool, prompt_id: DbId) -> AppResult<()> {
    PromptRepo::find_by_id(pool, prompt_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id: prompt_id,
        }))?;
    Ok(())
}

/// POST /api/v1/prompts
///
/// Submit a new prompt. Requires authentication; the submission enters the
/// moderation queue as `pending`.
pub async fn submit(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitPromptRequest>,
) -> AppResult<impl IntoResponse> {
    validate_submission(&input.title, &input.prompt_text, &input.category)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let create = CreatePrompt {
        title: input.title,
        prompt_text: input.prompt_text,
        category: input.category,
        submitted_by_id: auth.user_id,
    };

    let prompt = PromptRepo::create(&state.pool, &create).await?;

    tracing::info!(
        user_id = auth.user_id,
        prompt_id = prompt.id,
        category = %prompt.category,
        "Prompt submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: prompt })))
}

/// GET /api/v1/prompts
///
/// List all approved prompts with their submitter's username, newest first.
/// Public.
pub async fn list_approved(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let prompts = PromptRepo::list_with_submitter(&state.pool, STATUS_APPROVED).await?;
    Ok(Json(DataResponse { data: prompts }))
}

/// GET /api/v1/prompts/pending
///
/// List the moderation queue (pending prompts with submitter usernames).
/// Admin only.
pub async fn list_pending(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let prompts = PromptRepo::list_with_submitter(&state.pool, STATUS_PENDING).await?;
    Ok(Json(DataResponse { data: prompts }))
}

/// POST /api/v1/prompts/{id}/approve
///
/// Approve a prompt. Admin only. Re-deciding an already-decided prompt is a
/// permitted overwrite.
pub async fn approve(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(prompt_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let prompt = decide(&state.pool, prompt_id, STATUS_APPROVED).await?;

    tracing::info!(
        user_id = admin.user_id,
        prompt_id = prompt_id,
        status = STATUS_APPROVED,
        "Prompt moderated"
    );

    Ok(Json(DataResponse { data: prompt }))
}

/// POST /api/v1/prompts/{id}/reject
///
/// Reject a prompt. Admin only. Re-deciding an already-decided prompt is a
/// permitted overwrite.
pub async fn reject(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(prompt_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let prompt = decide(&state.pool, prompt_id, STATUS_REJECTED).await?;

    tracing::info!(
        user_id = admin.user_id,
        prompt_id = prompt_id,
        status = STATUS_REJECTED,
        "Prompt moderated"
    );

    Ok(Json(DataResponse { data: prompt }))
}

/// Apply a moderation decision, surfacing a missing id as `NotFound`.
async fn decide(pool: &PgPool, prompt_id: DbId, status: &str) -> AppResult<Prompt> {
    PromptRepo::set_status(pool, prompt_id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id: prompt_id,
        }))
}
