//! Handlers for the item resource.
//!
//! Each handler validates its input, performs exactly one repository call,
//! and maps the outcome through [`AppError`]. Malformed bodies, UUIDs, and
//! query strings are rejected with 422 before the store is ever contacted.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use items_core::item::{Item, ItemDetail, NewItem};
use items_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::Message;
use crate::state::AppState;

/// Default page size for `GET /items`.
const DEFAULT_LIMIT: u32 = 10;

/// POST /items
///
/// Create a new item. The store assigns `id` and `created_at`; the response
/// is the base view of the stored row.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> AppResult<Json<Item>> {
    let Json(payload) = payload.map_err(|e| AppError::param("body", e.body_text()))?;
    payload.validate()?;

    let item = ItemRepo::create(&state.store, &payload).await?;

    tracing::info!(id = %item.id, "Item created");

    Ok(Json(item))
}

/// GET /items
///
/// List items, paginated via `limit` (default 10) and `offset` (default 0).
pub async fn list_items(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<Vec<Item>>> {
    let Query(params) = params.map_err(|e| AppError::param("query", e.body_text()))?;
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = params.offset.unwrap_or(0);

    let items = ItemRepo::list(&state.store, limit, offset).await?;

    Ok(Json(items))
}

/// GET /items/{id}
///
/// Fetch a single item by id (base view).
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<Item>> {
    let Path(id) = id.map_err(|e| AppError::param("item_id", e.body_text()))?;

    let detail = ItemRepo::get(&state.store, id).await?;

    Ok(Json(Item::from(detail)))
}

/// PUT /items/{id}
///
/// Replace `name`/`description`/`price`/`tax` of an existing item. Responds
/// with the full view (including `created_at`).
pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> AppResult<Json<ItemDetail>> {
    let Path(id) = id.map_err(|e| AppError::param("item_id", e.body_text()))?;
    let Json(payload) = payload.map_err(|e| AppError::param("body", e.body_text()))?;
    payload.validate()?;

    let detail = ItemRepo::update(&state.store, id, &payload).await?;

    tracing::info!(id = %detail.id, "Item updated");

    Ok(Json(detail))
}

/// DELETE /items/{id}
///
/// Delete the item. Succeeds whether or not a row matched.
pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<Message>> {
    let Path(id) = id.map_err(|e| AppError::param("item_id", e.body_text()))?;

    ItemRepo::delete(&state.store, id).await?;

    tracing::info!(%id, "Item deleted");

    Ok(Json(Message {
        message: "Item deleted successfully",
    }))
}
