//! API description handler

use axum::Json;
use serde_json::{json, Value};

pub async fn describe() -> Json<Value> {
    Json(json!({
        "name": "BinSight Detection Backend",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /ingest": "Submit a classified detection",
            "GET /live": "Most recent detection",
            "GET /logs": "Detection history, newest first",
            "GET /billing": "Penalty summary over the history",
            "GET /health": "Service health",
            "GET /snapshots/*": "Stored snapshot images",
        },
    }))
}
