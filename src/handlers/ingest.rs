//! Ingestion handler

use std::path::Path;

use axum::{body::Bytes, extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::models::DetectionRecord;
use crate::{snapshot, validation, AppError, AppResult, AppState};

/// Ingest one detection result.
///
/// The body is read raw and parsed here so a malformed or wrong-shaped
/// payload always gets the schema-bearing 400, never an extractor
/// rejection. The record is persisted before the success response is
/// built: a 200 means the detection is on disk.
pub async fn ingest(State(state): State<AppState>, body: Bytes) -> AppResult<Json<Value>> {
    let value: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {}", e)))?;

    let payload = validation::validate(&value).map_err(AppError::Validation)?;

    let timestamp = payload
        .timestamp
        .clone()
        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true));

    // Image side path: failures fall back to the caller-supplied path.
    let snapshot_path = payload
        .snapshot_base64
        .as_deref()
        .and_then(|uri| {
            snapshot::store_snapshot(Path::new(&state.config.snapshot_dir), uri, &timestamp)
        })
        .or_else(|| payload.snapshot_path.clone())
        .unwrap_or_default();

    let record = DetectionRecord {
        class: payload.class,
        wet_dry: payload.wet_dry,
        confidence: payload.confidence,
        is_mixed: payload.is_mixed,
        is_violation: payload.is_violation,
        snapshot_path,
        timestamp,
    };

    state.store.append(record.clone())?;

    tracing::info!(
        "Detection ingested: class={:?} confidence={:.3} violation={}",
        record.class,
        record.confidence,
        record.is_violation
    );

    Ok(Json(json!({
        "message": "Detection ingested",
        "data": record,
    })))
}
