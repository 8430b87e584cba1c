//! Route definitions for the item resource.
//!
//! ```text
//! POST   /       -> create_item
//! GET    /       -> list_items
//! GET    /{id}   -> get_item
//! PUT    /{id}   -> update_item
//! DELETE /{id}   -> delete_item
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Item routes, mounted at `/items`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route(
            "/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
}
