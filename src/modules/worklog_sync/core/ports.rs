// Ports define what the reconciliation core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the tracker export, the switch-note log and the remote ticketing system as traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in adapters/outbound.
//
// Testing guidance
// - In memory implementations live next to the real ones and can be toggled offline.

use crate::modules::worklog_sync::core::remote_worklog::{RawWorklog, WorklogSubmission};
use crate::modules::worklog_sync::core::tracked_interval::RawIntervalRecord;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};

#[async_trait]
pub trait IntervalExport: Send + Sync {
    /// Every record the tracker knows about. An empty export is `Ok(vec![])`.
    async fn export(&self) -> anyhow::Result<Vec<RawIntervalRecord>>;
}

#[async_trait]
pub trait NoteLookup: Send + Sync {
    /// Note of the first switch to `ticket` recorded within `window` of `around`.
    async fn find_note(
        &self,
        ticket: &str,
        around: DateTime<Utc>,
        window: TimeDelta,
    ) -> anyhow::Result<Option<String>>;
}

#[async_trait]
pub trait WorklogRemote: Send + Sync {
    async fn list_worklogs(&self, ticket_id: &str) -> anyhow::Result<Vec<RawWorklog>>;

    async fn add_worklog(&self, submission: &WorklogSubmission) -> anyhow::Result<()>;

    async fn issue_summary(&self, ticket_id: &str) -> anyhow::Result<String>;
}
