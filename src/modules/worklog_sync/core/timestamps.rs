// Timestamp normalization for both sides of the reconciliation.
//
// Purpose
// - Turn every literal into an instant with a known offset exactly once, at ingestion.
//
// Responsibilities
// - Export literals: `20250806T151630Z` is UTC and is shown in the local offset for that instant.
//   Literals without a UTC marker are local wall-clock time. An explicit ISO offset is honored.
// - Remote literals: `Z`, `+hh:mm` and `+hhmm` are honored, a redundant trailing `+00:00` is dropped,
//   and a literal without an offset is UTC.
// - Submission: the local wall-clock reading of a start is re-tagged with the offset in effect now.
//
// Boundaries
// - The only source of local time is the injected Clock.

use crate::shared::core::clock::Clock;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

const COMPACT_FORMAT: &str = "%Y%m%dT%H%M%S";
const NAIVE_ISO_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const OFFSET_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
const REDUNDANT_UTC_SUFFIX: &str = "+00:00";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("unparseable timestamp: {0}")]
    Unparseable(String),

    #[error("local time does not exist: {0}")]
    NonexistentLocal(String),
}

/// Parse a start/end literal from the interval export.
pub fn parse_export_timestamp(
    raw: &str,
    clock: &dyn Clock,
) -> Result<DateTime<FixedOffset>, TimestampError> {
    let raw = raw.trim();
    if let Some(utc_literal) = raw.strip_suffix('Z') {
        if let Ok(naive) = NaiveDateTime::parse_from_str(utc_literal, COMPACT_FORMAT) {
            let instant = Utc.from_utc_datetime(&naive);
            return Ok(instant.with_timezone(&clock.offset_at(instant)));
        }
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            let instant = instant.with_timezone(&Utc);
            return Ok(instant.with_timezone(&clock.offset_at(instant)));
        }
        return Err(TimestampError::Unparseable(raw.to_string()));
    }
    if let Ok(with_offset) = parse_with_offset(raw) {
        return Ok(with_offset);
    }
    let naive = NaiveDateTime::parse_from_str(raw, COMPACT_FORMAT)
        .ok()
        .or_else(|| parse_naive_iso(raw))
        .ok_or_else(|| TimestampError::Unparseable(raw.to_string()))?;
    at_local_wall_clock(naive, clock)
}

/// Parse a `started` literal reported by the remote ticketing system.
pub fn parse_remote_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    let raw = raw.trim();
    if let Ok(parsed) = parse_with_offset(raw) {
        return Ok(parsed);
    }
    if let Some(stripped) = raw.strip_suffix(REDUNDANT_UTC_SUFFIX) {
        if let Ok(parsed) = parse_with_offset(stripped) {
            return Ok(parsed);
        }
    }
    parse_naive_iso(raw)
        .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
        .ok_or_else(|| TimestampError::Unparseable(raw.to_string()))
}

/// Attach the local offset that applies to a wall-clock reading.
pub fn at_local_wall_clock(
    naive: NaiveDateTime,
    clock: &dyn Clock,
) -> Result<DateTime<FixedOffset>, TimestampError> {
    naive
        .and_local_timezone(clock.offset_for_local(naive))
        .single()
        .ok_or_else(|| TimestampError::NonexistentLocal(naive.to_string()))
}

/// The instant sent to the remote system for a locally recorded start: same wall-clock reading,
/// tagged with the offset in effect at the time of the call.
pub fn resolve_submission_instant(
    start: DateTime<FixedOffset>,
    clock: &dyn Clock,
) -> Result<DateTime<FixedOffset>, TimestampError> {
    let wall_clock = start.naive_local();
    wall_clock
        .and_local_timezone(clock.current_offset())
        .single()
        .ok_or_else(|| TimestampError::NonexistentLocal(wall_clock.to_string()))
}

/// Naive ISO-8601 rendering of the local wall-clock reading, as shown to operators.
pub fn display_local(instant: &DateTime<FixedOffset>) -> String {
    instant.naive_local().format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn parse_with_offset(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).or_else(|_| DateTime::parse_from_str(raw, OFFSET_ISO_FORMAT))
}

fn parse_naive_iso(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_ISO_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}
