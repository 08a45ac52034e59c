// Locally recorded time-tracking data.
//
// Purpose
// - RawIntervalRecord mirrors one record of the tracker export, untouched.
// - TrackedInterval is a validated span of work on one ticket, built fresh per extraction pass.
//
// Notes
// - start and end carry the local offset resolved at ingestion and are never re-interpreted.
// - Intervals that come from a client go through `try_new`: end never precedes start and the
//   duration is always end - start.

use crate::modules::worklog_sync::core::ticket_key::TicketKey;
use crate::shared::core::duration::format_duration;
use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntervalError {
    #[error("end {end} precedes start {start}")]
    EndBeforeStart {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },

    #[error("duration of {0}s is out of range")]
    DurationOutOfRange(i64),

    #[error("duration_seconds is {declared} but end - start is {actual}s")]
    DurationMismatch { declared: i64, actual: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIntervalRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SubmittedInterval")]
pub struct TrackedInterval {
    pub id: Option<u64>,
    pub ticket: TicketKey,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub duration_seconds: i64,
    pub tags: Vec<String>,
    pub note: Option<String>,
}

/// Wire shape of an interval sent back by a client. `duration_seconds` is optional and, when
/// present, has to agree with the span.
#[derive(Deserialize)]
struct SubmittedInterval {
    #[serde(default)]
    id: Option<u64>,
    ticket: TicketKey,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    #[serde(default)]
    duration_seconds: Option<i64>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    note: Option<String>,
}

impl TryFrom<SubmittedInterval> for TrackedInterval {
    type Error = IntervalError;

    fn try_from(submitted: SubmittedInterval) -> Result<Self, Self::Error> {
        let interval = TrackedInterval::try_new(
            submitted.ticket,
            submitted.start,
            submitted.end,
            submitted.tags,
            submitted.note,
        )?;
        match submitted.duration_seconds {
            Some(declared) if declared != interval.duration_seconds => {
                Err(IntervalError::DurationMismatch {
                    declared,
                    actual: interval.duration_seconds,
                })
            }
            _ => Ok(TrackedInterval {
                id: submitted.id,
                ..interval
            }),
        }
    }
}

impl TrackedInterval {
    pub fn try_new(
        ticket: TicketKey,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        tags: Vec<String>,
        note: Option<String>,
    ) -> Result<Self, IntervalError> {
        if end < start {
            return Err(IntervalError::EndBeforeStart { start, end });
        }
        let tags = if tags.is_empty() {
            vec![ticket.to_string()]
        } else {
            tags
        };
        Ok(Self {
            id: None,
            ticket,
            start,
            end,
            duration_seconds: (end - start).num_seconds(),
            tags,
            note,
        })
    }

    /// Build from a start and a length in seconds, as clients that do not send an end do.
    pub fn from_duration(
        ticket: TicketKey,
        start: DateTime<FixedOffset>,
        duration_seconds: i64,
        tags: Vec<String>,
        note: Option<String>,
    ) -> Result<Self, IntervalError> {
        let end = TimeDelta::try_seconds(duration_seconds)
            .and_then(|length| start.checked_add_signed(length))
            .ok_or(IntervalError::DurationOutOfRange(duration_seconds))?;
        Self::try_new(ticket, start, end, tags, note)
    }

    pub fn duration_formatted(&self) -> String {
        format_duration(self.duration_seconds)
    }

    /// Note text, if one is attached and is not blank.
    pub fn usable_note(&self) -> Option<&str> {
        self.note
            .as_deref()
            .map(str::trim)
            .filter(|note| !note.is_empty())
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }
}
