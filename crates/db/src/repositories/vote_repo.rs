//! Repository for the `votes` table.
//!
//! The cast operation is a single atomic upsert. The toggle decision
//! (same star clears the vote) is evaluated inside `ON CONFLICT DO UPDATE`;
//! concurrent clicks by one user serialize on their unique row.

use prompthub_core::types::DbId;
use sqlx::PgPool;

use crate::models::vote::{RatingSummary, Vote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, prompt_id, user_id, rating, created_at, updated_at";

/// Provides vote upsert and aggregation operations.
pub struct VoteRepo;

impl VoteRepo {
    /// Find the current rating one user has given one prompt.
    ///
    /// Returns `None` when the user has never voted on the prompt. A
    /// toggled-off vote reads as `Some(0)`.
    pub async fn find_user_rating(
        pool: &PgPool,
        prompt_id: DbId,
        user_id: DbId,
    ) -> Result<Option<i16>, sqlx::Error> {
        let row: Option<(i16,)> =
            sqlx::query_as("SELECT rating FROM votes WHERE prompt_id = $1 AND user_id = $2")
                .bind(prompt_id)
                .bind(user_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(rating,)| rating))
    }

    /// Cast a star click as one atomic upsert and return the updated row.
    ///
    /// Inserts the rating on first vote. On conflict with the existing
    /// `(prompt_id, user_id)` row the toggle rule applies: clicking the star
    /// already stored clears the rating to 0, any other star overwrites.
    /// This mirrors `prompthub_core::rating::toggled_rating`.
    pub async fn cast(
        pool: &PgPool,
        prompt_id: DbId,
        user_id: DbId,
        star: i16,
    ) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes (prompt_id, user_id, rating) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (prompt_id, user_id) DO UPDATE SET \
                 rating = CASE WHEN votes.rating = excluded.rating THEN 0 \
                               ELSE excluded.rating END, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(prompt_id)
            .bind(user_id)
            .bind(star)
            .fetch_one(pool)
            .await
    }

    /// Get the rating summary (average + count) for a prompt.
    ///
    /// Toggled-off rows (`rating = 0`) are excluded from both aggregates;
    /// a prompt with no effective votes yields `{average: 0.0, count: 0}`.
    pub async fn summary(pool: &PgPool, prompt_id: DbId) -> Result<RatingSummary, sqlx::Error> {
        let row: (f64, i64) = sqlx::query_as(
            "SELECT COALESCE(AVG(rating)::float8, 0.0), COUNT(*) \
             FROM votes WHERE prompt_id = $1 AND rating > 0",
        )
        .bind(prompt_id)
        .fetch_one(pool)
        .await?;

        Ok(RatingSummary {
            prompt_id,
            average: row.0,
            count: row.1,
        })
    }
}
