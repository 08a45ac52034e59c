// In memory stand-in for the remote ticketing system.
//
// Responsibilities
// - Serve worklogs per ticket and issue summaries.
// - Record submissions and append them as worklogs authored by `writes_as`, so a later read sees them.
//
// Testing guidance
// - `toggle_offline` fails every call, `reject_writes` fails only submissions.

use crate::modules::worklog_sync::core::ports::WorklogRemote;
use crate::modules::worklog_sync::core::remote_worklog::{RawWorklog, WorklogSubmission};
use crate::shared::core::duration::format_duration;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub const STARTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

#[derive(Default)]
pub struct InMemoryWorklogRemote {
    writes_as: String,
    worklogs: RwLock<HashMap<String, Vec<RawWorklog>>>,
    summaries: RwLock<HashMap<String, String>>,
    submissions: RwLock<Vec<WorklogSubmission>>,
    is_offline: bool,
    rejects_writes: bool,
}

impl InMemoryWorklogRemote {
    pub fn new(writes_as: impl Into<String>) -> Self {
        Self {
            writes_as: writes_as.into(),
            ..Self::default()
        }
    }

    pub fn with_worklogs(mut self, ticket_id: &str, worklogs: Vec<RawWorklog>) -> Self {
        self.worklogs
            .get_mut()
            .entry(ticket_id.to_string())
            .or_default()
            .extend(worklogs);
        self
    }

    pub fn with_issue_summary(mut self, ticket_id: &str, summary: &str) -> Self {
        self.summaries
            .get_mut()
            .insert(ticket_id.to_string(), summary.to_string());
        self
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn reject_writes(&mut self) {
        self.rejects_writes = true;
    }

    pub async fn submissions(&self) -> Vec<WorklogSubmission> {
        self.submissions.read().await.clone()
    }
}

#[async_trait::async_trait]
impl WorklogRemote for InMemoryWorklogRemote {
    async fn list_worklogs(&self, ticket_id: &str) -> anyhow::Result<Vec<RawWorklog>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Worklog remote offline"));
        }

        Ok(self
            .worklogs
            .read()
            .await
            .get(ticket_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_worklog(&self, submission: &WorklogSubmission) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Worklog remote offline"));
        }
        if self.rejects_writes {
            return Err(anyhow::anyhow!(
                "Worklog rejected for {}",
                submission.ticket_id
            ));
        }

        let mut worklogs = self.worklogs.write().await;
        let ticket_worklogs = worklogs.entry(submission.ticket_id.clone()).or_default();
        ticket_worklogs.push(RawWorklog {
            id: format!("{}-{}", submission.ticket_id, ticket_worklogs.len() + 1),
            author: Some(self.writes_as.clone()),
            started: submission.started.format(STARTED_FORMAT).to_string(),
            time_spent_seconds: submission.time_spent_seconds,
            time_spent: format_duration(submission.time_spent_seconds),
            comment: Some(submission.comment.clone()),
        });
        self.submissions.write().await.push(submission.clone());
        Ok(())
    }

    async fn issue_summary(&self, ticket_id: &str) -> anyhow::Result<String> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Worklog remote offline"));
        }

        self.summaries
            .read()
            .await
            .get(ticket_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Issue {ticket_id} does not exist"))
    }
}
