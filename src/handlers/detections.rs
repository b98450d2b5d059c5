//! Read handlers: live state, history and billing

use axum::{extract::State, Json};

use crate::models::{BillingSummary, DetectionRecord};
use crate::{AppError, AppResult, AppState};

/// Most recently ingested detection.
pub async fn live(State(state): State<AppState>) -> AppResult<Json<DetectionRecord>> {
    let record = state
        .store
        .live()?
        .ok_or_else(|| AppError::NotFound("No live detection data available".to_string()))?;

    Ok(Json(record))
}

/// Full bounded history, newest first.
pub async fn logs(State(state): State<AppState>) -> AppResult<Json<Vec<DetectionRecord>>> {
    let logs = state.store.logs()?;
    Ok(Json(logs))
}

/// Billing summary derived from the history.
pub async fn billing(State(state): State<AppState>) -> AppResult<Json<BillingSummary>> {
    let logs = state.store.logs()?;
    Ok(Json(crate::billing::summarize(&logs)))
}
