//! Prompt status vocabulary and moderation decision rules.
//!
//! A prompt enters the queue as `pending` and an admin decision moves it to
//! `approved` or `rejected`. Decisions are unconditional overwrites: deciding
//! an already-decided prompt simply re-applies the new status. The constants
//! here must match the CHECK constraint on `prompts.status`.

/// Initial status assigned to every submission.
pub const STATUS_PENDING: &str = "pending";

/// Prompt passed moderation and is publicly listed.
pub const STATUS_APPROVED: &str = "approved";

/// Prompt failed moderation and is hidden.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// Status values an admin decision may set. `pending` is creation-only.
pub const VALID_DECISIONS: &[&str] = &[STATUS_APPROVED, STATUS_REJECTED];

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Validate that a moderation decision is one of the accepted values.
///
/// Rejects `pending`: a decision always resolves the queue entry one way or
/// the other, never back into it.
pub fn validate_decision(decision: &str) -> Result<(), String> {
    if VALID_DECISIONS.contains(&decision) {
        Ok(())
    } else {
        Err(format!(
            "Invalid decision '{decision}'. Must be one of: {}",
            VALID_DECISIONS.join(", ")
        ))
    }
}
