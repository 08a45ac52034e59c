use crate::modules::worklog_sync::core::identity::IdentityMatcher;
use crate::modules::worklog_sync::core::policy::SyncPolicy;
use crate::modules::worklog_sync::core::ports::{IntervalExport, NoteLookup, WorklogRemote};
use crate::modules::worklog_sync::use_cases::annotate_note::handler::NoteAnnotator;
use crate::modules::worklog_sync::use_cases::extract_intervals::handler::IntervalExtractor;
use crate::modules::worklog_sync::use_cases::fetch_worklogs::handler::WorklogFetcher;
use crate::modules::worklog_sync::use_cases::list_intervals::handler::ListIntervalsHandler;
use crate::modules::worklog_sync::use_cases::summarize_tickets::handler::SummarizeTicketsHandler;
use crate::modules::worklog_sync::use_cases::sync_batch::handler::SyncBatchHandler;
use crate::modules::worklog_sync::use_cases::sync_interval::handler::SyncExecutor;
use crate::shared::core::clock::Clock;
use std::sync::Arc;

/// The outside world, as the use cases see it.
pub struct Ports {
    pub export: Arc<dyn IntervalExport>,
    pub notes: Arc<dyn NoteLookup>,
    pub remote: Arc<dyn WorklogRemote>,
    pub identity: Arc<dyn IdentityMatcher>,
    pub clock: Arc<dyn Clock>,
}

#[derive(Clone)]
pub struct AppState {
    pub list_intervals: Arc<ListIntervalsHandler>,
    pub sync_batch: Arc<SyncBatchHandler>,
    pub summarize_tickets: Arc<SummarizeTicketsHandler>,
}

impl AppState {
    pub fn wire(ports: Ports, policy: SyncPolicy) -> Self {
        let extractor = Arc::new(IntervalExtractor::new(
            ports.export,
            ports.clock.clone(),
            policy,
        ));
        let annotator = Arc::new(NoteAnnotator::new(ports.notes, policy));
        let fetcher = Arc::new(WorklogFetcher::new(ports.remote.clone(), ports.identity));
        let executor = Arc::new(SyncExecutor::new(
            ports.remote.clone(),
            fetcher.clone(),
            ports.clock.clone(),
            policy,
        ));

        Self {
            list_intervals: Arc::new(ListIntervalsHandler::new(
                extractor.clone(),
                annotator.clone(),
                fetcher.clone(),
                ports.clock.clone(),
                policy,
            )),
            sync_batch: Arc::new(SyncBatchHandler::new(annotator, executor)),
            summarize_tickets: Arc::new(SummarizeTicketsHandler::new(
                extractor,
                ports.remote,
                fetcher,
                ports.clock,
            )),
        }
    }
}
