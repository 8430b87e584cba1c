//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?limit=&offset=`).
///
/// Both values must be non-negative; `u32` makes negative or non-numeric
/// input fail at extraction time, which the handlers surface as 422 before
/// any store call. Defaults (10 / 0) are applied in the handler.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
