use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::worklog_sync::core::remote_worklog::RemoteWorklog;
use crate::modules::worklog_sync::use_cases::list_intervals::handler::{DateRange, IntervalView};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlWorklog {
    pub id: String,
    pub ticket_id: String,
    pub author: String,
    pub started: String,
    pub time_spent_seconds: i64,
    pub time_spent: String,
    pub comment: String,
}

impl From<RemoteWorklog> for GqlWorklog {
    fn from(w: RemoteWorklog) -> Self {
        Self {
            id: w.id,
            ticket_id: w.ticket_id,
            author: w.author,
            started: w.started.to_rfc3339(),
            time_spent_seconds: w.time_spent_seconds,
            time_spent: w.time_spent,
            comment: w.comment,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlInterval {
    pub id: Option<u64>,
    pub ticket: String,
    pub start: String,
    pub end: String,
    pub duration_seconds: i64,
    pub duration_formatted: String,
    pub tags: Vec<String>,
    pub note: Option<String>,
    pub has_worklog: bool,
    pub existing_worklogs: Vec<GqlWorklog>,
}

impl From<IntervalView> for GqlInterval {
    fn from(v: IntervalView) -> Self {
        Self {
            id: v.interval.id,
            ticket: v.interval.ticket.to_string(),
            start: v.interval.start.to_rfc3339(),
            end: v.interval.end.to_rfc3339(),
            duration_seconds: v.interval.duration_seconds,
            duration_formatted: v.duration_formatted,
            tags: v.interval.tags,
            note: v.interval.note,
            has_worklog: v.has_worklog,
            existing_worklogs: v.existing_worklogs.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct IntervalsQuery;

#[Object]
impl IntervalsQuery {
    async fn intervals(
        &self,
        context: &Context<'_>,
        start_date: String,
        end_date: String,
    ) -> GqlResult<Vec<GqlInterval>> {
        let state = context.data_unchecked::<AppState>();
        let range = DateRange::parse(&start_date, &end_date)?;
        let views = state.list_intervals.list(range).await;
        Ok(views.into_iter().map(Into::into).collect())
    }
}
