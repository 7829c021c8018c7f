//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod prompt_repo;
pub mod user_repo;
pub mod vote_repo;

pub use prompt_repo::PromptRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
