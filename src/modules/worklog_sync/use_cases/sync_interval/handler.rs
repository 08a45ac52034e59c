// Submits one interval as a new remote worklog unless one already represents it.
//
// Responsibilities
// - Resolve the submission instant from the start's local wall-clock and the current offset.
// - Re-check the ticket's worklogs for a duplicate before every attempt.
// - Refuse requests shorter than the noise floor before touching the remote.
// - Build the comment and write the worklog, folding any failure into the outcome.
//
// Notes
// - The duplicate check runs against the instant that would be submitted, so a retry finds the
//   worklog written by an earlier attempt even when the offset changed in between.

use crate::modules::worklog_sync::core::errors::ReconciliationError;
use crate::modules::worklog_sync::core::policy::SyncPolicy;
use crate::modules::worklog_sync::core::ports::WorklogRemote;
use crate::modules::worklog_sync::core::remote_worklog::{RemoteWorklog, WorklogSubmission};
use crate::modules::worklog_sync::core::sync_result::SyncOutcome;
use crate::modules::worklog_sync::core::timestamps::{display_local, resolve_submission_instant};
use crate::modules::worklog_sync::core::tracked_interval::TrackedInterval;
use crate::modules::worklog_sync::use_cases::detect_duplicate::detect::{
    DuplicateCandidate, find_duplicate,
};
use crate::modules::worklog_sync::use_cases::fetch_worklogs::handler::WorklogFetcher;
use crate::modules::worklog_sync::use_cases::sync_interval::comment::build_comment;
use crate::shared::core::clock::Clock;
use crate::shared::core::duration::format_duration;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest<'a> {
    pub ticket_id: &'a str,
    pub start: DateTime<FixedOffset>,
    pub duration_seconds: i64,
    pub note: Option<&'a str>,
}

impl<'a> SyncRequest<'a> {
    pub fn from_interval(interval: &'a TrackedInterval) -> Self {
        Self {
            ticket_id: interval.ticket.as_str(),
            start: interval.start,
            duration_seconds: interval.duration_seconds,
            note: interval.usable_note(),
        }
    }

    pub fn comment(&self) -> String {
        build_comment(self.note)
    }
}

pub struct SyncExecutor {
    remote: Arc<dyn WorklogRemote>,
    fetcher: Arc<WorklogFetcher>,
    clock: Arc<dyn Clock>,
    policy: SyncPolicy,
}

impl SyncExecutor {
    pub fn new(
        remote: Arc<dyn WorklogRemote>,
        fetcher: Arc<WorklogFetcher>,
        clock: Arc<dyn Clock>,
        policy: SyncPolicy,
    ) -> Self {
        Self {
            remote,
            fetcher,
            clock,
            policy,
        }
    }

    pub fn fetcher(&self) -> &WorklogFetcher {
        &self.fetcher
    }

    /// A failed outcome for a request no extraction would have produced, if this is one.
    pub fn screen(&self, request: &SyncRequest<'_>) -> Option<SyncOutcome> {
        let floor = self.policy.noise_floor_seconds;
        (request.duration_seconds < floor).then(|| {
            tracing::warn!(
                ticket = request.ticket_id,
                duration_seconds = request.duration_seconds,
                "interval below the noise floor; not syncing"
            );
            SyncOutcome::failed(format!(
                "Error syncing to {}: {}s is below the {floor}s noise floor",
                request.ticket_id, request.duration_seconds
            ))
        })
    }

    /// Fetch the ticket's worklogs fresh, then sync against them.
    pub async fn sync(&self, request: &SyncRequest<'_>) -> SyncOutcome {
        if let Some(rejected) = self.screen(request) {
            return rejected;
        }
        let existing = self.fetcher.fetch_or_empty(request.ticket_id, None).await;
        self.sync_against(request, &existing).await
    }

    /// Sync against worklogs the caller already fetched for this ticket.
    #[tracing::instrument(skip(self, existing), fields(ticket = request.ticket_id))]
    pub async fn sync_against(
        &self,
        request: &SyncRequest<'_>,
        existing: &[RemoteWorklog],
    ) -> SyncOutcome {
        if let Some(rejected) = self.screen(request) {
            return rejected;
        }
        let ticket = request.ticket_id;
        let submitted_start = match resolve_submission_instant(request.start, &*self.clock) {
            Ok(instant) => instant,
            Err(error) => {
                tracing::warn!(%error, "could not resolve submission instant");
                return SyncOutcome::failed(format!("Error syncing to {ticket}: {error}"));
            }
        };

        let candidate = DuplicateCandidate {
            ticket_id: ticket,
            start: submitted_start,
            duration_seconds: request.duration_seconds,
        };
        if let Some(found) = find_duplicate(&candidate, existing, &self.policy) {
            tracing::info!(worklog_id = %found.id, "worklog already exists; skipping");
            return SyncOutcome::duplicate(format!(
                "Worklog already exists for {ticket} at {}",
                display_local(&request.start)
            ));
        }

        let submission = WorklogSubmission {
            ticket_id: ticket.to_string(),
            time_spent_seconds: request.duration_seconds,
            started: submitted_start,
            comment: request.comment(),
        };
        match self.submit(&submission).await {
            Ok(()) => {
                let duration = format_duration(request.duration_seconds);
                tracing::info!(%duration, "worklog submitted");
                SyncOutcome::synced(format!("Successfully synced {duration} to {ticket}"))
            }
            Err(error) => {
                tracing::warn!(%error, "worklog submission failed");
                SyncOutcome::failed(format!("Error syncing to {ticket}: {}", error.reason()))
            }
        }
    }

    async fn submit(&self, submission: &WorklogSubmission) -> Result<(), ReconciliationError> {
        self.remote
            .add_worklog(submission)
            .await
            .map_err(|e| ReconciliationError::remote_write(&submission.ticket_id, &e))
    }
}
