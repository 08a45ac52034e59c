use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::worklog_sync::core::ticket_key::TicketKey;
use crate::modules::worklog_sync::use_cases::list_intervals::handler::DateRange;
use crate::modules::worklog_sync::use_cases::list_intervals::inbound::graphql::GqlWorklog;
use crate::modules::worklog_sync::use_cases::summarize_tickets::handler::TicketSummary;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTicketSummary {
    pub ticket: String,
    pub summary: Option<String>,
    pub summary_error: Option<String>,
    pub interval_count: usize,
    pub total_seconds: i64,
    pub total_formatted: String,
    pub earliest_start: Option<String>,
    pub latest_end: Option<String>,
    pub existing_seconds: i64,
    pub existing_formatted: String,
    pub existing_worklogs: Vec<GqlWorklog>,
}

impl From<TicketSummary> for GqlTicketSummary {
    fn from(s: TicketSummary) -> Self {
        Self {
            ticket: s.ticket,
            summary: s.summary,
            summary_error: s.summary_error,
            interval_count: s.interval_count,
            total_seconds: s.total_seconds,
            total_formatted: s.total_formatted,
            earliest_start: s.earliest_start.map(|t| t.to_rfc3339()),
            latest_end: s.latest_end.map(|t| t.to_rfc3339()),
            existing_seconds: s.existing_seconds,
            existing_formatted: s.existing_formatted,
            existing_worklogs: s.existing_worklogs.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct TicketsQuery;

#[Object]
impl TicketsQuery {
    async fn tickets(
        &self,
        context: &Context<'_>,
        start_date: Option<String>,
        end_date: Option<String>,
        ticket_id: Option<String>,
    ) -> GqlResult<Vec<GqlTicketSummary>> {
        let state = context.data_unchecked::<AppState>();
        let window = match (start_date, end_date) {
            (Some(start), Some(end)) => Some(DateRange::parse(&start, &end)?),
            _ => None,
        };
        let ticket = ticket_id.as_deref().map(TicketKey::parse).transpose()?;
        let summaries = state.summarize_tickets.summarize(window, ticket).await;
        Ok(summaries.into_iter().map(Into::into).collect())
    }
}
