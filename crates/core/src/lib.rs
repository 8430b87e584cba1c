//! Domain types for the items service.
//!
//! Holds the item data model (both response projections) and the
//! creation/update payload with its field validation rules. Everything here
//! is pure data -- the store adapter lives in `items-db` and the HTTP surface
//! in `items-api`.

pub mod item;
pub mod types;
