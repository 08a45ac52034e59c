use crate::modules::worklog_sync::core::errors::ReconciliationError;
use crate::modules::worklog_sync::core::policy::SyncPolicy;
use crate::modules::worklog_sync::core::ports::IntervalExport;
use crate::modules::worklog_sync::core::tracked_interval::TrackedInterval;
use crate::modules::worklog_sync::use_cases::extract_intervals::extract::extract_intervals;
use crate::shared::core::clock::Clock;
use std::sync::Arc;

pub struct IntervalExtractor {
    export: Arc<dyn IntervalExport>,
    clock: Arc<dyn Clock>,
    policy: SyncPolicy,
}

impl IntervalExtractor {
    pub fn new(export: Arc<dyn IntervalExport>, clock: Arc<dyn Clock>, policy: SyncPolicy) -> Self {
        Self {
            export,
            clock,
            policy,
        }
    }

    /// Read the export and extract intervals, surfacing an unavailable export as an error.
    #[tracing::instrument(skip(self))]
    pub async fn extract(&self) -> Result<Vec<TrackedInterval>, ReconciliationError> {
        let records = self
            .export
            .export()
            .await
            .map_err(|e| ReconciliationError::ExportUnavailable(format!("{e:#}")))?;
        let total = records.len();
        let intervals = extract_intervals(records, &*self.clock, &self.policy);
        tracing::debug!(total, kept = intervals.len(), "extracted tracked intervals");
        Ok(intervals)
    }

    /// Same as `extract`, but an unavailable export reads as "no data".
    pub async fn extract_or_empty(&self) -> Vec<TrackedInterval> {
        match self.extract().await {
            Ok(intervals) => intervals,
            Err(error) => {
                tracing::warn!(%error, "interval export failed; treating as empty");
                Vec::new()
            }
        }
    }
}
