use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::worklog_sync::use_cases::list_intervals::handler::DateRange;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListIntervalsParams {
    pub start_date: String,
    pub end_date: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListIntervalsParams>,
) -> impl IntoResponse {
    let range = match DateRange::parse(&params.start_date, &params.end_date) {
        Ok(range) => range,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };
    Json(state.list_intervals.list(range).await).into_response()
}
