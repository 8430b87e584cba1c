//! Shared response payload types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` payload for endpoints that only confirm an
/// action (the liveness root and delete).
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}
