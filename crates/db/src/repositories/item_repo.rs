//! Repository for the `items` table.
//!
//! Each operation is exactly one PostgREST round-trip; outcomes are
//! normalized into [`StoreError`]. Nothing here retries, batches, or caches.

use postgrest::{Builder, Postgrest};
use serde::de::DeserializeOwned;

use items_core::item::{Item, ItemDetail, NewItem};
use items_core::types::ItemId;

use crate::error::StoreError;

/// Table holding all items.
const TABLE: &str = "items";

/// Column list for base-view queries.
const BASE_COLUMNS: &str = "id,name,description,price,tax";

/// Provides data access for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert one item and return the stored row (base view).
    ///
    /// The store assigns `id` and `created_at`; an accepted insert that
    /// returns no row is reported as [`StoreError::CreationFailed`].
    pub async fn create(store: &Postgrest, item: &NewItem) -> Result<Item, StoreError> {
        let body = serde_json::to_string(item)?;
        let rows: Vec<Item> = fetch_rows(store.from(TABLE).insert(body)).await?;
        rows.into_iter().next().ok_or(StoreError::CreationFailed)
    }

    /// List at most `limit` items starting at `offset` (base view).
    ///
    /// Ordering is whatever the store returns. A zero limit short-circuits to
    /// an empty page without a store round-trip.
    pub async fn list(store: &Postgrest, limit: u32, offset: u32) -> Result<Vec<Item>, StoreError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let low = offset as usize;
        let high = low + limit as usize - 1;
        let rows: Vec<Item> =
            fetch_rows(store.from(TABLE).select(BASE_COLUMNS).range(low, high)).await?;

        tracing::debug!(count = rows.len(), limit, offset, "Fetched items page");

        Ok(rows)
    }

    /// Fetch a single item by id, including its creation timestamp.
    pub async fn get(store: &Postgrest, id: ItemId) -> Result<ItemDetail, StoreError> {
        let rows: Vec<ItemDetail> =
            fetch_rows(store.from(TABLE).select("*").eq("id", id.to_string())).await?;
        rows.into_iter().next().ok_or(StoreError::NotFound(id))
    }

    /// Replace the mutable fields of the item matching `id`.
    ///
    /// `id` and `created_at` are untouched. Zero affected rows means the item
    /// does not exist.
    pub async fn update(
        store: &Postgrest,
        id: ItemId,
        item: &NewItem,
    ) -> Result<ItemDetail, StoreError> {
        let body = serde_json::to_string(item)?;
        let rows: Vec<ItemDetail> =
            fetch_rows(store.from(TABLE).update(body).eq("id", id.to_string())).await?;
        rows.into_iter().next().ok_or(StoreError::NotFound(id))
    }

    /// Delete the item matching `id`.
    ///
    /// The store is not asked whether a row existed; a successful round-trip
    /// is a successful delete.
    pub async fn delete(store: &Postgrest, id: ItemId) -> Result<(), StoreError> {
        let resp = store
            .from(TABLE)
            .delete()
            .eq("id", id.to_string())
            .execute()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Rejected(store_message(status.as_u16(), &body)));
        }

        Ok(())
    }
}

/// Execute a prepared query and decode the returned rows.
async fn fetch_rows<T: DeserializeOwned>(query: Builder) -> Result<Vec<T>, StoreError> {
    let resp = query
        .execute()
        .await
        .map_err(|e| StoreError::Transport(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| StoreError::Transport(e.to_string()))?;

    if !status.is_success() {
        return Err(StoreError::Rejected(store_message(status.as_u16(), &body)));
    }

    Ok(serde_json::from_str(&body)?)
}

/// Render a non-success store response as a single message line.
///
/// PostgREST error bodies are JSON with a `message` field; fall back to the
/// raw body when the shape differs.
fn store_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_owned());

    if detail.is_empty() {
        format!("store returned status {status}")
    } else {
        format!("store returned status {status}: {detail}")
    }
}
