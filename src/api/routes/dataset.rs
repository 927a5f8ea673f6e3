//! Dataset Routes
//!
//! Dataset metadata the dashboard fetches once at startup to size its
//! tick timer and window arithmetic.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::DatasetSummaryResponse;
use crate::api::state::AppState;
use crate::telemetry;

/// GET /api/v1/dataset
pub async fn dataset_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummaryResponse> {
    let chunk_size = state.config.default_chunk_size;

    Json(DatasetSummaryResponse {
        rows: state.dataset.len(),
        devices: state.dataset.devices(),
        first_ts: state.dataset.first_ts(),
        last_ts: state.dataset.last_ts(),
        chunk_size,
        window_count: telemetry::window_count(state.dataset.len(), chunk_size),
        poll_interval_ms: state.config.poll_interval_ms,
    })
}
