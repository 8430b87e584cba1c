use std::sync::Arc;

use items_db::Postgrest;

use crate::config::AppConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store handle
/// is constructed once at startup and injected here rather than reached
/// through a global accessor, so tests can substitute their own.
#[derive(Clone)]
pub struct AppState {
    /// PostgREST client for the Supabase store.
    pub store: Arc<Postgrest>,
    /// Application configuration.
    pub config: Arc<AppConfig>,
}
