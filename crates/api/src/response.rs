//! Shared response envelope types for API handlers.
//!
//! Prompt and vote payloads use a `{ "data": ... }` envelope; auth endpoints
//! return their object directly. Use [`DataResponse`] instead of ad-hoc
//! `serde_json::json!({ "data": ... })` for compile-time type safety.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
