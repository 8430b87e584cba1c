use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use validator::ValidationErrors;

use items_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Keeps the three ways a request can fail as distinct variants so the status
/// mapping below stays deliberate -- in particular, a missing row surfaces as
/// 404 instead of disappearing into a catch-all 400.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The payload violated one or more field constraints.
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    /// A path, query, or body parameter could not be parsed at all.
    #[error("invalid {name}: {message}")]
    Param { name: &'static str, message: String },

    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for rejected path/query/body parameters.
    pub fn param(name: &'static str, message: impl Into<String>) -> Self {
        AppError::Param {
            name,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, field_detail(errors))
            }

            AppError::Param { name, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!([{ "field": name, "message": message }]),
            ),

            AppError::Store(err) => match err {
                StoreError::NotFound(_) => (StatusCode::NOT_FOUND, json!("Item not found")),
                StoreError::CreationFailed => {
                    (StatusCode::BAD_REQUEST, json!("Failed to create item"))
                }
                other => {
                    tracing::error!(error = %other, "Store request failed");
                    (StatusCode::BAD_REQUEST, json!(other.to_string()))
                }
            },
        };

        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}

/// Flatten [`ValidationErrors`] into a `[{field, message}]` array.
///
/// Entries are sorted by field name so clients (and tests) see deterministic
/// output regardless of hash-map iteration order.
fn field_detail(errors: &ValidationErrors) -> serde_json::Value {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect();
    fields.sort();

    let entries: Vec<serde_json::Value> = fields
        .into_iter()
        .map(|(field, message)| json!({ "field": field, "message": message }))
        .collect();
    serde_json::Value::Array(entries)
}
