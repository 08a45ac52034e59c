use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::worklog_sync::core::ticket_key::TicketKey;
use crate::modules::worklog_sync::use_cases::list_intervals::handler::DateRange;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SummarizeTicketsParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub ticket_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<SummarizeTicketsParams>,
) -> impl IntoResponse {
    let window = match (params.start_date.as_deref(), params.end_date.as_deref()) {
        (Some(start), Some(end)) => match DateRange::parse(start, end) {
            Ok(range) => Some(range),
            Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        },
        _ => None,
    };
    let ticket = match params.ticket_id.as_deref().map(TicketKey::parse).transpose() {
        Ok(ticket) => ticket,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    Json(state.summarize_tickets.summarize(window, ticket).await).into_response()
}
