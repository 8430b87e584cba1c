//! Item entity and request payload.
//!
//! Two projections exist over the same stored row: [`Item`], the base view
//! returned by create/list/get, and [`ItemDetail`], which adds the
//! store-assigned creation timestamp and is returned by update.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{ItemId, Timestamp};

// ---------------------------------------------------------------------------
// Request payload
// ---------------------------------------------------------------------------

/// Payload for creating an item or replacing its mutable fields.
///
/// Never carries an `id` or `created_at` -- both are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewItem {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 500, message = "must be between 1 and 500 characters"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    pub tax: Option<f64>,
}

// ---------------------------------------------------------------------------
// Stored entity projections
// ---------------------------------------------------------------------------

/// An item as returned by create/list/get (base view, no timestamps).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub tax: Option<f64>,
}

/// An item including its creation timestamp (full view, returned by update).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub tax: Option<f64>,
    pub created_at: Option<Timestamp>,
}

impl From<ItemDetail> for Item {
    fn from(detail: ItemDetail) -> Self {
        Item {
            id: detail.id,
            name: detail.name,
            description: detail.description,
            price: detail.price,
            tax: detail.tax,
        }
    }
}
