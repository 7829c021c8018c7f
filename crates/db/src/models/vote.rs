//! Vote entity model and the derived rating summary.

use prompthub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `votes` table.
///
/// At most one row exists per `(prompt_id, user_id)` pair
/// (`uq_votes_prompt_user`); a `rating` of 0 is a toggled-off vote kept in
/// place so the upsert key stays stable.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    pub id: DbId,
    pub prompt_id: DbId,
    pub user_id: DbId,
    /// Stored rating in `0..=5`; 0 means "no vote".
    pub rating: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Derived, never persisted: the aggregate rating of one prompt.
///
/// Toggled-off rows (`rating = 0`) are excluded from both fields.
#[derive(Debug, Clone, Serialize)]
pub struct RatingSummary {
    pub prompt_id: DbId,
    /// Arithmetic mean of effective ratings, 0.0 when there are none.
    pub average: f64,
    /// Number of effective (non-zero) votes.
    pub count: i64,
}
