//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Any joined/derived structs the read side needs

pub mod prompt;
pub mod user;
pub mod vote;
