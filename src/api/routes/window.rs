//! Window Routes
//!
//! Serves the window of readings selected by the dashboard's tick counter.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ReadingDto, WindowQuery, WindowResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::telemetry;

/// Upper bound on the per-request window size; the dashboard never asks for
/// more than a few dozen rows per tick.
const MAX_CHUNK_SIZE: usize = 1_000;

/// GET /api/v1/window/:n
///
/// Returns the `n`-th consecutive window of readings. `?size=S` overrides
/// the configured chunk size for this request. An index past the end of the
/// dataset yields 404 with error code `WINDOW_EXHAUSTED`.
pub async fn get_window(
    State(state): State<Arc<AppState>>,
    Path(n): Path<usize>,
    Query(params): Query<WindowQuery>,
) -> ApiResult<Json<WindowResponse>> {
    let size = params.size.unwrap_or(state.config.default_chunk_size);

    if size == 0 {
        return Err(ApiError::Validation(
            "size must be greater than zero".to_string(),
        ));
    }
    if size > MAX_CHUNK_SIZE {
        return Err(ApiError::Validation(format!(
            "size must be at most {}",
            MAX_CHUNK_SIZE
        )));
    }

    let rows = telemetry::window(&state.dataset, size, n)?;

    let total_rows = state.dataset.len();
    let start_row = n * size;
    let end_row = start_row + rows.len();

    tracing::debug!(
        index = n,
        size,
        start_row,
        end_row,
        "Serving telemetry window"
    );

    Ok(Json(WindowResponse {
        index: n,
        size,
        start_row,
        end_row,
        total_rows,
        window_count: telemetry::window_count(total_rows, size),
        last: end_row == total_rows,
        readings: rows.iter().map(ReadingDto::from).collect(),
    }))
}
