//! Repository for the `prompts` table.

use prompthub_core::types::DbId;
use sqlx::PgPool;

use crate::models::prompt::{CreatePrompt, Prompt, PromptWithSubmitter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, prompt_text, category, submitted_by_id, status, created_at, updated_at";

/// Column list for the submitter JOIN (prompts aliased `p`, users `u`).
const JOINED_COLUMNS: &str = "p.id, p.title, p.prompt_text, p.category, p.status, \
     p.submitted_by_id, u.username, p.created_at";

/// Provides CRUD operations for prompts and the moderation status update.
pub struct PromptRepo;

impl PromptRepo {
    /// Insert a new prompt submission. The database defaults `status` to
    /// `pending`.
    pub async fn create(pool: &PgPool, input: &CreatePrompt) -> Result<Prompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts (title, prompt_text, category, submitted_by_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(&input.title)
            .bind(&input.prompt_text)
            .bind(&input.category)
            .bind(input.submitted_by_id)
            .fetch_one(pool)
            .await
    }

    /// Find a prompt by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all prompts with the given status, joined with the submitter's
    /// username, newest first.
    pub async fn list_with_submitter(
        pool: &PgPool,
        status: &str,
    ) -> Result<Vec<PromptWithSubmitter>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM prompts p \
             JOIN users u ON u.id = p.submitted_by_id \
             WHERE p.status = $1 \
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, PromptWithSubmitter>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Set a prompt's status unconditionally (idempotent overwrite).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET status = $2, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
