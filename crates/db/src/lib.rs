//! Store access layer for the items service.
//!
//! Supabase exposes its Postgres tables over PostgREST; this crate constructs
//! the client handle once at startup and funnels every row operation through
//! [`repositories::ItemRepo`]. The handle is passed explicitly to each call --
//! there is no global connection state.

pub mod error;
pub mod repositories;

pub use error::StoreError;
pub use postgrest::Postgrest;

/// Build the PostgREST client for a Supabase project.
///
/// `supabase_url` is the project root (e.g. `https://xyz.supabase.co`); the
/// REST endpoint lives under `/rest/v1`. The key is sent both as the `apikey`
/// header and as a bearer token, which is what Supabase expects from
/// server-side clients.
pub fn connect(supabase_url: &str, supabase_key: &str) -> Postgrest {
    let endpoint = format!("{}/rest/v1", supabase_url.trim_end_matches('/'));
    Postgrest::new(endpoint)
        .insert_header("apikey", supabase_key)
        .insert_header("Authorization", format!("Bearer {supabase_key}"))
}
