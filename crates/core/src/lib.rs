//! Domain logic for the Prompt Hub backend.
//!
//! Everything in this crate is pure and synchronous: the error taxonomy,
//! shared id/timestamp types, the role/status/category vocabularies, and the
//! star-rating rules. The DB and API crates both build on these definitions
//! so validation behaves identically at every layer.

pub mod category;
pub mod error;
pub mod moderation;
pub mod rating;
pub mod roles;
pub mod submission;
pub mod types;
