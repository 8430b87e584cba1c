//! Shared helpers for API integration tests.
//!
//! The store is an external Supabase project in production; tests substitute
//! an in-process stub speaking the same PostgREST wire shapes (array-of-rows
//! responses, `id=eq.<uuid>` filters, `Range` pagination) bound on an
//! ephemeral port. The injected store handle makes the swap invisible to the
//! code under test.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, Request};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use tower::ServiceExt;

use items_api::config::AppConfig;
use items_api::router::build_app_router;
use items_api::state::AppState;

// ---------------------------------------------------------------------------
// PostgREST stub
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, serde::Serialize)]
struct StubRow {
    id: uuid::Uuid,
    name: String,
    description: String,
    price: Option<f64>,
    tax: Option<f64>,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, serde::Deserialize)]
struct RowPatch {
    name: String,
    description: String,
    price: Option<f64>,
    tax: Option<f64>,
}

/// Query parameters PostgREST clients send: an optional `id=eq.<uuid>` filter
/// plus `limit`/`offset` pagination (some client versions use a `Range`
/// header instead; both are honored).
#[derive(Debug, serde::Deserialize)]
struct FilterParams {
    id: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

/// In-memory `items` table behind a PostgREST-shaped HTTP facade.
#[derive(Clone, Default)]
pub struct StubStore {
    rows: Arc<Mutex<Vec<StubRow>>>,
    hits: Arc<AtomicUsize>,
}

impl StubStore {
    /// Number of requests the stub has served.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Number of rows currently stored.
    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

fn eq_uuid(params: &FilterParams) -> Option<uuid::Uuid> {
    params.id.as_deref()?.strip_prefix("eq.")?.parse().ok()
}

fn range_bounds(headers: &HeaderMap, params: &FilterParams) -> Option<(usize, usize)> {
    if let Some(value) = headers.get("range").and_then(|v| v.to_str().ok()) {
        let (low, high) = value.split_once('-')?;
        return Some((low.parse().ok()?, high.parse().ok()?));
    }
    let limit = params.limit?;
    let offset = params.offset.unwrap_or(0);
    Some((offset, offset + limit.saturating_sub(1)))
}

async fn insert_row(
    State(store): State<StubStore>,
    Json(input): Json<RowPatch>,
) -> Json<Vec<StubRow>> {
    store.hits.fetch_add(1, Ordering::SeqCst);

    let row = StubRow {
        id: uuid::Uuid::new_v4(),
        name: input.name,
        description: input.description,
        price: input.price,
        tax: input.tax,
        created_at: chrono::Utc::now(),
    };
    store.rows.lock().unwrap().push(row.clone());

    Json(vec![row])
}

async fn select_rows(
    State(store): State<StubStore>,
    Query(params): Query<FilterParams>,
    headers: HeaderMap,
) -> Json<Vec<StubRow>> {
    store.hits.fetch_add(1, Ordering::SeqCst);

    let rows = store.rows.lock().unwrap();
    if let Some(id) = eq_uuid(&params) {
        return Json(rows.iter().filter(|r| r.id == id).cloned().collect());
    }

    let page = match range_bounds(&headers, &params) {
        Some((low, high)) => rows
            .iter()
            .skip(low)
            .take(high.saturating_sub(low) + 1)
            .cloned()
            .collect(),
        None => rows.clone(),
    };
    Json(page)
}

async fn update_rows(
    State(store): State<StubStore>,
    Query(params): Query<FilterParams>,
    Json(input): Json<RowPatch>,
) -> Json<Vec<StubRow>> {
    store.hits.fetch_add(1, Ordering::SeqCst);

    let id = eq_uuid(&params).expect("update requires an id filter");
    let mut rows = store.rows.lock().unwrap();
    let updated: Vec<StubRow> = rows
        .iter_mut()
        .filter(|r| r.id == id)
        .map(|r| {
            r.name = input.name.clone();
            r.description = input.description.clone();
            r.price = input.price;
            r.tax = input.tax;
            r.clone()
        })
        .collect();

    Json(updated)
}

async fn delete_rows(
    State(store): State<StubStore>,
    Query(params): Query<FilterParams>,
) -> Json<Vec<StubRow>> {
    store.hits.fetch_add(1, Ordering::SeqCst);

    let id = eq_uuid(&params).expect("delete requires an id filter");
    let mut rows = store.rows.lock().unwrap();
    let (deleted, kept): (Vec<_>, Vec<_>) = rows.drain(..).partition(|r| r.id == id);
    *rows = kept;

    Json(deleted)
}

/// Bind the stub on an ephemeral port and serve it in the background.
async fn spawn_stub_store() -> (StubStore, SocketAddr) {
    let store = StubStore::default();
    let router = Router::new()
        .route(
            "/rest/v1/items",
            get(select_rows)
                .post(insert_row)
                .patch(update_rows)
                .delete(delete_rows),
        )
        .with_state(store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (store, addr)
}

// ---------------------------------------------------------------------------
// Application under test
// ---------------------------------------------------------------------------

/// Build a test `AppConfig` pointed at the given store endpoint.
pub fn test_config(supabase_url: String) -> AppConfig {
    AppConfig {
        app_name: "Supabase Items API".to_string(),
        app_version: "test".to_string(),
        debug: false,
        supabase_url,
        supabase_key: "test-service-key".to_string(),
        api_prefix: "/api/v1".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router (middleware included) backed by a fresh
/// stub store.
pub async fn build_test_app() -> (Router, StubStore) {
    let (stub, addr) = spawn_stub_store().await;
    let config = test_config(format!("http://{addr}"));

    let store = items_db::connect(&config.supabase_url, &config.supabase_key);
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };

    (build_app_router(state, &config), stub)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Send a GET request to the app.
pub async fn get_path(app: &Router, path: &str) -> Response {
    send(app, Method::GET, path, None).await
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, path, Some(body)).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: &Router, path: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, path, Some(body)).await
}

/// Send a DELETE request to the app.
pub async fn delete_path(app: &Router, path: &str) -> Response {
    send(app, Method::DELETE, path, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
