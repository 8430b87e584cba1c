use items_core::types::ItemId;

/// Outcome classification for a single store round-trip.
///
/// Keeps "row missing" and "store refused" as distinct variants so the HTTP
/// layer can pick status codes deliberately instead of collapsing every
/// failure into one bucket.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row matched the given id on get/update.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// The store accepted an insert but returned no row.
    #[error("store returned no row for the inserted item")]
    CreationFailed,

    /// The request never completed (connection, DNS, timeout).
    #[error("store request failed: {0}")]
    Transport(String),

    /// The store answered with a non-success status.
    #[error("{0}")]
    Rejected(String),

    /// The store answered with a body this service could not decode.
    #[error("malformed store response: {0}")]
    Decode(#[from] serde_json::Error),
}
