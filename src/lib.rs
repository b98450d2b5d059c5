//! BinSight Detection Backend
//!
//! Ingestion server for waste-detection results from an external
//! classifier.
//!
//! # Architecture
//!
//! ```text
//! classifier ──POST /ingest──▶ Validator ──▶ snapshot side path
//!                                  │
//!                                  ▼
//!                          Store (single writer)
//!                                  │
//!                        {live, logs} JSON document
//!                                  ▲
//!     GET /live /logs /billing ────┘
//! ```

pub mod billing;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod snapshot;
pub mod store;
pub mod validation;

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::DefaultBodyLimit,
    http::{Method, StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

/// Embedded image payloads can run to tens of megabytes.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<store::Store>,
    pub config: config::Config,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: store::Store, config: config::Config) -> Self {
        Self {
            store: Arc::new(store),
            config,
            started_at: Instant::now(),
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let snapshot_dir = state.config.snapshot_dir.clone();

    Router::new()
        .route("/", get(handlers::index::describe))
        .route("/ingest", post(handlers::ingest::ingest))
        .route("/live", get(handlers::detections::live))
        .route("/logs", get(handlers::detections::logs))
        .route("/billing", get(handlers::detections::billing))
        .route("/health", get(handlers::health::check))
        .nest_service("/snapshots", ServeDir::new(snapshot_dir))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    let body = Json(json!({
        "error": "Endpoint not found",
        "path": uri.path(),
        "method": method.as_str(),
    }));
    (StatusCode::NOT_FOUND, body)
}
