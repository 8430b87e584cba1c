use axum::{routing::get, Json, Router};

use crate::response::Message;
use crate::state::AppState;

/// GET / -- liveness probe confirming the service is up and wired to the
/// Supabase store.
async fn root() -> Json<Message> {
    Json(Message {
        message: "Hello World - Connected to Supabase",
    })
}

/// Mount the root route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}
