use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::worklog_sync::core::tracked_interval::TrackedInterval;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SyncBatchBody {
    pub intervals: Vec<TrackedInterval>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SyncBatchBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let report = state.sync_batch.sync_batch(body.intervals).await;
    (StatusCode::OK, Json(report)).into_response()
}
