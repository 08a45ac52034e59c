// Pure extraction of ticket-tagged intervals from raw export records.
//
// Responsibilities
// - Keep records carrying a ticket-key tag; the first such tag becomes the ticket.
// - Resolve start and end to offset-aware instants; an open interval ends now.
// - Drop records with unreadable timestamps, negative spans, or spans under the noise floor.
// - Return survivors newest start first.
//
// Boundaries
// - No input or output. Skips are reported through tracing only; the caller never sees them.

use crate::modules::worklog_sync::core::policy::SyncPolicy;
use crate::modules::worklog_sync::core::ticket_key::TicketKey;
use crate::modules::worklog_sync::core::timestamps::{TimestampError, parse_export_timestamp};
use crate::modules::worklog_sync::core::tracked_interval::{RawIntervalRecord, TrackedInterval};
use crate::shared::core::clock::Clock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkipReason {
    #[error("record has no tags")]
    NoTags,

    #[error("no tag is a ticket key")]
    NoTicketTag,

    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    #[error("end precedes start by {0}s")]
    NegativeDuration(i64),

    #[error("{0}s is below the noise floor")]
    BelowNoiseFloor(i64),
}

pub fn extract_intervals(
    records: Vec<RawIntervalRecord>,
    clock: &dyn Clock,
    policy: &SyncPolicy,
) -> Vec<TrackedInterval> {
    let mut intervals: Vec<TrackedInterval> = records
        .into_iter()
        .filter_map(|record| {
            let record_id = record.id;
            match interval_from_record(record, clock, policy) {
                Ok(interval) => Some(interval),
                Err(reason) => {
                    tracing::debug!(?record_id, %reason, "skipping export record");
                    None
                }
            }
        })
        .collect();
    intervals.sort_by(|a, b| b.start.cmp(&a.start));
    intervals
}

pub fn interval_from_record(
    record: RawIntervalRecord,
    clock: &dyn Clock,
    policy: &SyncPolicy,
) -> Result<TrackedInterval, SkipReason> {
    let tags = record.tags.ok_or(SkipReason::NoTags)?;
    let ticket = TicketKey::first_in(&tags).ok_or(SkipReason::NoTicketTag)?;

    let start = parse_export_timestamp(&record.start, clock)?;
    let end = match record.end.as_deref() {
        Some(end) => parse_export_timestamp(end, clock)?,
        None => clock.now_local(),
    };

    let duration_seconds = (end - start).num_seconds();
    if duration_seconds < 0 {
        return Err(SkipReason::NegativeDuration(-duration_seconds));
    }
    if duration_seconds < policy.noise_floor_seconds {
        return Err(SkipReason::BelowNoiseFloor(duration_seconds));
    }

    Ok(TrackedInterval {
        id: record.id,
        ticket,
        start,
        end,
        duration_seconds,
        tags,
        note: None,
    })
}
