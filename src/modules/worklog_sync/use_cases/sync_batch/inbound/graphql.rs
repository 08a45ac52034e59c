use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult, SimpleObject};
use chrono::DateTime;

use crate::modules::worklog_sync::core::sync_result::{SyncBatchReport, SyncResult, SyncStatus};
use crate::modules::worklog_sync::core::ticket_key::TicketKey;
use crate::modules::worklog_sync::core::tracked_interval::TrackedInterval;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct GqlIntervalInput {
    pub ticket: String,
    /// RFC 3339 start with the offset it was recorded in.
    pub start: String,
    pub duration_seconds: i64,
    pub tags: Option<Vec<String>>,
    pub note: Option<String>,
}

impl TryFrom<GqlIntervalInput> for TrackedInterval {
    type Error = async_graphql::Error;

    fn try_from(input: GqlIntervalInput) -> Result<Self, Self::Error> {
        let ticket = TicketKey::parse(&input.ticket)?;
        let start = DateTime::parse_from_rfc3339(&input.start)
            .map_err(|e| async_graphql::Error::new(format!("invalid start {}: {e}", input.start)))?;
        let interval = TrackedInterval::from_duration(
            ticket,
            start,
            input.duration_seconds,
            input.tags.unwrap_or_default(),
            input.note,
        )?;
        Ok(interval)
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlSyncResult {
    pub ticket: String,
    pub start: String,
    pub duration: String,
    pub success: bool,
    pub duplicate: bool,
    pub message: String,
    pub comment: String,
}

impl From<SyncResult> for GqlSyncResult {
    fn from(r: SyncResult) -> Self {
        Self {
            ticket: r.ticket,
            start: r.start.to_rfc3339(),
            duration: r.duration_formatted,
            success: r.success,
            duplicate: r.status == SyncStatus::Duplicate,
            message: r.message,
            comment: r.comment_used,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlSyncBatchReport {
    pub batch_id: ID,
    pub results: Vec<GqlSyncResult>,
    pub total: usize,
    pub success: usize,
    pub failed: usize,
}

impl From<SyncBatchReport> for GqlSyncBatchReport {
    fn from(report: SyncBatchReport) -> Self {
        Self {
            batch_id: ID(report.batch_id.to_string()),
            total: report.summary.total,
            success: report.summary.success,
            failed: report.summary.failed,
            results: report.results.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn sync_batch(
        &self,
        context: &Context<'_>,
        intervals: Vec<GqlIntervalInput>,
    ) -> GqlResult<GqlSyncBatchReport> {
        let state = context.data_unchecked::<AppState>();
        let intervals = intervals
            .into_iter()
            .map(TrackedInterval::try_from)
            .collect::<GqlResult<Vec<_>>>()?;
        Ok(state.sync_batch.sync_batch(intervals).await.into())
    }
}
