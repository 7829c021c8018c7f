//! Prompt entity model and DTOs.

use prompthub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `prompts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prompt {
    pub id: DbId,
    pub title: String,
    pub prompt_text: String,
    /// One of the fixed category strings (see `prompthub_core::category`).
    pub category: String,
    pub submitted_by_id: DbId,
    /// `"pending"`, `"approved"`, or `"rejected"`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A prompt joined with its submitter's username, for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptWithSubmitter {
    pub id: DbId,
    pub title: String,
    pub prompt_text: String,
    pub category: String,
    pub status: String,
    pub submitted_by_id: DbId,
    /// Username of the submitting user.
    pub username: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new prompt submission.
#[derive(Debug, Clone)]
pub struct CreatePrompt {
    pub title: String,
    pub prompt_text: String,
    pub category: String,
    pub submitted_by_id: DbId,
}
