// Read model for reviewing tracked intervals before a sync.
//
// Responsibilities
// - Keep intervals whose local start date falls inside an inclusive date range.
// - Attach notes and, per ticket, the worklogs we already logged since the range start.
// - Flag intervals that a sync would skip as already logged.

use crate::modules::worklog_sync::core::policy::SyncPolicy;
use crate::modules::worklog_sync::core::remote_worklog::RemoteWorklog;
use crate::modules::worklog_sync::core::timestamps::resolve_submission_instant;
use crate::modules::worklog_sync::core::tracked_interval::TrackedInterval;
use crate::modules::worklog_sync::use_cases::annotate_note::handler::NoteAnnotator;
use crate::modules::worklog_sync::use_cases::detect_duplicate::detect::{
    DuplicateCandidate, is_duplicate,
};
use crate::modules::worklog_sync::use_cases::extract_intervals::handler::IntervalExtractor;
use crate::modules::worklog_sync::use_cases::fetch_worklogs::date_floor::DateFloor;
use crate::modules::worklog_sync::use_cases::fetch_worklogs::handler::WorklogFetcher;
use crate::shared::core::clock::Clock;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("invalid date {0}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DateRangeError::InvalidDate(raw.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalView {
    #[serde(flatten)]
    pub interval: TrackedInterval,
    pub duration_formatted: String,
    pub has_worklog: bool,
    pub existing_worklogs: Vec<RemoteWorklog>,
}

pub struct ListIntervalsHandler {
    extractor: Arc<IntervalExtractor>,
    annotator: Arc<NoteAnnotator>,
    fetcher: Arc<WorklogFetcher>,
    clock: Arc<dyn Clock>,
    policy: SyncPolicy,
}

impl ListIntervalsHandler {
    pub fn new(
        extractor: Arc<IntervalExtractor>,
        annotator: Arc<NoteAnnotator>,
        fetcher: Arc<WorklogFetcher>,
        clock: Arc<dyn Clock>,
        policy: SyncPolicy,
    ) -> Self {
        Self {
            extractor,
            annotator,
            fetcher,
            clock,
            policy,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self, range: DateRange) -> Vec<IntervalView> {
        let intervals: Vec<TrackedInterval> = self
            .extractor
            .extract_or_empty()
            .await
            .into_iter()
            .filter(|interval| range.contains(interval.start.date_naive()))
            .collect();

        let floor = DateFloor::Date(range.start);
        let mut worklogs: HashMap<String, Vec<RemoteWorklog>> = HashMap::new();
        let mut views = Vec::with_capacity(intervals.len());
        for interval in intervals {
            let interval = self.annotator.annotate(interval).await;
            let ticket = interval.ticket.as_str();
            if !worklogs.contains_key(ticket) {
                let fetched = self.fetcher.fetch_or_empty(ticket, Some(floor)).await;
                worklogs.insert(ticket.to_string(), fetched);
            }
            let existing = worklogs.get(ticket).cloned().unwrap_or_default();
            views.push(IntervalView {
                has_worklog: self.already_logged(&interval, &existing),
                duration_formatted: interval.duration_formatted(),
                existing_worklogs: existing,
                interval,
            });
        }
        tracing::debug!(count = views.len(), "listed intervals");
        views
    }

    fn already_logged(&self, interval: &TrackedInterval, existing: &[RemoteWorklog]) -> bool {
        let start = resolve_submission_instant(interval.start, &*self.clock).unwrap_or(interval.start);
        let candidate = DuplicateCandidate {
            ticket_id: interval.ticket.as_str(),
            start,
            duration_seconds: interval.duration_seconds,
        };
        is_duplicate(&candidate, existing, &self.policy)
    }
}
