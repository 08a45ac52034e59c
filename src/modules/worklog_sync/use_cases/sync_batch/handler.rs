// Drives the sync executor over a list of intervals and reports one result per interval.
//
// Responsibilities
// - Best-effort note lookup for intervals that arrive without one.
// - Sequential processing in input order. A failed item never stops the batch.
// - Intervals below the noise floor become failed results without reaching the remote.
// - Cache each ticket's worklogs for the run, dropping the entry after a successful write so the
//   next interval on that ticket sees it.

use crate::modules::worklog_sync::core::remote_worklog::RemoteWorklog;
use crate::modules::worklog_sync::core::sync_result::{SyncBatchReport, SyncResult};
use crate::modules::worklog_sync::core::tracked_interval::TrackedInterval;
use crate::modules::worklog_sync::use_cases::annotate_note::handler::NoteAnnotator;
use crate::modules::worklog_sync::use_cases::sync_interval::handler::{SyncExecutor, SyncRequest};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

pub struct SyncBatchHandler {
    annotator: Arc<NoteAnnotator>,
    executor: Arc<SyncExecutor>,
}

impl SyncBatchHandler {
    pub fn new(annotator: Arc<NoteAnnotator>, executor: Arc<SyncExecutor>) -> Self {
        Self {
            annotator,
            executor,
        }
    }

    pub async fn sync_batch(&self, intervals: Vec<TrackedInterval>) -> SyncBatchReport {
        let batch_id = Uuid::now_v7();
        let span = tracing::info_span!("sync_batch", %batch_id, size = intervals.len());
        async move {
            let results = self.run(intervals).await;
            let report = SyncBatchReport::new(batch_id, results);
            tracing::info!(
                total = report.summary.total,
                success = report.summary.success,
                failed = report.summary.failed,
                "batch finished"
            );
            report
        }
        .instrument(span)
        .await
    }

    async fn run(&self, intervals: Vec<TrackedInterval>) -> Vec<SyncResult> {
        let mut worklogs: HashMap<String, Vec<RemoteWorklog>> = HashMap::new();
        let mut results = Vec::with_capacity(intervals.len());

        for interval in intervals {
            let interval = self.annotator.annotate(interval).await;
            let request = SyncRequest::from_interval(&interval);
            let comment_used = request.comment();

            let outcome = match self.executor.screen(&request) {
                Some(rejected) => rejected,
                None => {
                    let existing = match worklogs.entry(request.ticket_id.to_string()) {
                        Entry::Occupied(entry) => entry.into_mut(),
                        Entry::Vacant(entry) => {
                            let fetched = self
                                .executor
                                .fetcher()
                                .fetch_or_empty(request.ticket_id, None)
                                .await;
                            entry.insert(fetched)
                        }
                    };
                    self.executor.sync_against(&request, existing).await
                }
            };
            if outcome.success() {
                worklogs.remove(request.ticket_id);
            }

            results.push(SyncResult {
                ticket: interval.ticket.to_string(),
                start: interval.start,
                duration_formatted: interval.duration_formatted(),
                success: outcome.success(),
                status: outcome.status,
                message: outcome.message,
                comment_used,
            });
        }
        results
    }
}
