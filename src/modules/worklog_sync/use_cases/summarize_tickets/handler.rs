// Per-ticket totals over a date window, next to what is already logged remotely.
//
// Responsibilities
// - Group the window's intervals by ticket, most recently worked ticket first.
// - Load the remote issue summary, keeping the load error as text when it fails.
// - Sum our worklogs started between the window start (00:00 UTC) and end (23:59:59 UTC).
//
// Notes
// - Asking for one ticket always yields one summary, even with no local intervals.

use crate::modules::worklog_sync::core::ports::WorklogRemote;
use crate::modules::worklog_sync::core::remote_worklog::RemoteWorklog;
use crate::modules::worklog_sync::core::ticket_key::TicketKey;
use crate::modules::worklog_sync::core::tracked_interval::TrackedInterval;
use crate::modules::worklog_sync::use_cases::extract_intervals::handler::IntervalExtractor;
use crate::modules::worklog_sync::use_cases::fetch_worklogs::date_floor::DateFloor;
use crate::modules::worklog_sync::use_cases::fetch_worklogs::handler::WorklogFetcher;
use crate::modules::worklog_sync::use_cases::list_intervals::handler::DateRange;
use crate::shared::core::clock::Clock;
use crate::shared::core::duration::format_duration;
use chrono::{DateTime, Days, FixedOffset, NaiveTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_WINDOW_DAYS: u64 = 90;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketSummary {
    pub ticket: String,
    pub summary: Option<String>,
    pub summary_error: Option<String>,
    pub intervals: Vec<TrackedInterval>,
    pub interval_count: usize,
    pub total_seconds: i64,
    pub total_formatted: String,
    pub earliest_start: Option<DateTime<FixedOffset>>,
    pub latest_end: Option<DateTime<FixedOffset>>,
    pub existing_seconds: i64,
    pub existing_formatted: String,
    pub existing_worklogs: Vec<RemoteWorklog>,
}

pub struct SummarizeTicketsHandler {
    extractor: Arc<IntervalExtractor>,
    remote: Arc<dyn WorklogRemote>,
    fetcher: Arc<WorklogFetcher>,
    clock: Arc<dyn Clock>,
}

impl SummarizeTicketsHandler {
    pub fn new(
        extractor: Arc<IntervalExtractor>,
        remote: Arc<dyn WorklogRemote>,
        fetcher: Arc<WorklogFetcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            extractor,
            remote,
            fetcher,
            clock,
        }
    }

    /// The last `DEFAULT_WINDOW_DAYS` days up to today, local time.
    pub fn default_window(&self) -> DateRange {
        let end = self.clock.now_local().date_naive();
        let start = end
            .checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS))
            .unwrap_or(end);
        DateRange { start, end }
    }

    #[tracing::instrument(skip(self))]
    pub async fn summarize(
        &self,
        window: Option<DateRange>,
        ticket: Option<TicketKey>,
    ) -> Vec<TicketSummary> {
        let window = window.unwrap_or_else(|| self.default_window());
        let intervals = self
            .extractor
            .extract_or_empty()
            .await
            .into_iter()
            .filter(|interval| window.contains(interval.start.date_naive()))
            .filter(|interval| ticket.as_ref().is_none_or(|t| interval.ticket == *t));

        let mut groups: Vec<(String, Vec<TrackedInterval>)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for interval in intervals {
            let key = interval.ticket.to_string();
            let position = *positions.entry(key.clone()).or_insert_with(|| {
                groups.push((key, Vec::new()));
                groups.len() - 1
            });
            groups[position].1.push(interval);
        }
        if let Some(ticket) = ticket {
            if groups.is_empty() {
                groups.push((ticket.to_string(), Vec::new()));
            }
        }

        let mut summaries = Vec::with_capacity(groups.len());
        for (ticket, intervals) in groups {
            summaries.push(self.summarize_one(ticket, intervals, &window).await);
        }
        summaries
    }

    async fn summarize_one(
        &self,
        ticket: String,
        intervals: Vec<TrackedInterval>,
        window: &DateRange,
    ) -> TicketSummary {
        let (summary, summary_error) = match self.remote.issue_summary(&ticket).await {
            Ok(summary) => (Some(summary), None),
            Err(error) => {
                tracing::warn!(%ticket, error = %format!("{error:#}"), "could not load issue");
                (None, Some(format!("Error loading: {error:#}")))
            }
        };

        let existing_worklogs = self
            .fetcher
            .fetch_or_empty(&ticket, Some(DateFloor::Date(window.start)))
            .await;
        let window_end = window
            .end
            .and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
            .and_utc();
        let existing_seconds = existing_worklogs
            .iter()
            .filter(|worklog| worklog.started.with_timezone(&Utc) <= window_end)
            .map(|worklog| worklog.time_spent_seconds)
            .sum();

        let total_seconds = intervals.iter().map(|i| i.duration_seconds).sum();
        TicketSummary {
            earliest_start: intervals.iter().map(|i| i.start).min(),
            latest_end: intervals.iter().map(|i| i.end).max(),
            interval_count: intervals.len(),
            total_formatted: format_duration(total_seconds),
            total_seconds,
            existing_formatted: format_duration(existing_seconds),
            existing_seconds,
            existing_worklogs,
            intervals,
            summary,
            summary_error,
            ticket,
        }
    }
}
