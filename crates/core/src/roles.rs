//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260715000001_create_users_table.sql`.

/// Default role assigned at registration.
pub const ROLE_USER: &str = "user";

/// Role required for the moderation queue and status decisions.
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values.
pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

/// Validate that a role string is one of the accepted values.
pub fn validate_role(role: &str) -> Result<(), String> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        ))
    }
}
