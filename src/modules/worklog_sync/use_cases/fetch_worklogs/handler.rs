// Reads a ticket's worklogs and keeps the ones that belong to us.
//
// Responsibilities
// - Drop worklogs with no author, a foreign author, or a start we cannot read.
// - Apply the optional date floor on absolute instants.
// - Return the survivors newest first.

use crate::modules::worklog_sync::core::errors::ReconciliationError;
use crate::modules::worklog_sync::core::identity::IdentityMatcher;
use crate::modules::worklog_sync::core::ports::WorklogRemote;
use crate::modules::worklog_sync::core::remote_worklog::{RawWorklog, RemoteWorklog};
use crate::modules::worklog_sync::use_cases::fetch_worklogs::date_floor::DateFloor;
use std::sync::Arc;

pub struct WorklogFetcher {
    remote: Arc<dyn WorklogRemote>,
    identity: Arc<dyn IdentityMatcher>,
}

impl WorklogFetcher {
    pub fn new(remote: Arc<dyn WorklogRemote>, identity: Arc<dyn IdentityMatcher>) -> Self {
        Self { remote, identity }
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch(
        &self,
        ticket_id: &str,
        floor: Option<DateFloor>,
    ) -> Result<Vec<RemoteWorklog>, ReconciliationError> {
        let raw = self
            .remote
            .list_worklogs(ticket_id)
            .await
            .map_err(|e| ReconciliationError::remote_read(ticket_id, &e))?;
        Ok(self.ours(ticket_id, raw, floor))
    }

    /// Same as `fetch`, but a failed read counts as "no existing worklogs".
    pub async fn fetch_or_empty(
        &self,
        ticket_id: &str,
        floor: Option<DateFloor>,
    ) -> Vec<RemoteWorklog> {
        match self.fetch(ticket_id, floor).await {
            Ok(worklogs) => worklogs,
            Err(error) => {
                tracing::warn!(ticket_id, %error, "worklog fetch failed; treating as empty");
                Vec::new()
            }
        }
    }

    fn ours(
        &self,
        ticket_id: &str,
        raw: Vec<RawWorklog>,
        floor: Option<DateFloor>,
    ) -> Vec<RemoteWorklog> {
        let mut worklogs: Vec<RemoteWorklog> = raw
            .into_iter()
            .filter_map(|worklog| {
                let author = worklog.author.clone()?;
                if !self.identity.matches(&author) {
                    return None;
                }
                let id = worklog.id.clone();
                RemoteWorklog::from_raw(ticket_id, author, worklog)
                    .inspect_err(|error| {
                        tracing::debug!(ticket_id, worklog_id = %id, %error, "skipping worklog");
                    })
                    .ok()
            })
            .filter(|worklog| floor.is_none_or(|floor| floor.admits(&worklog.started)))
            .collect();
        worklogs.sort_by(|a, b| b.started.cmp(&a.started));
        worklogs
    }
}
