use crate::modules::worklog_sync::core::timestamps::{TimestampError, parse_remote_timestamp};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Lower bound on worklog start times. A bare date means midnight UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFloor {
    Date(NaiveDate),
    Instant(DateTime<FixedOffset>),
}

impl DateFloor {
    pub fn parse(raw: &str) -> Result<Self, TimestampError> {
        let raw = raw.trim();
        if raw.contains('T') {
            return parse_remote_timestamp(raw).map(Self::Instant);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Self::Date)
            .map_err(|_| TimestampError::Unparseable(raw.to_string()))
    }

    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            Self::Date(date) => date.and_time(chrono::NaiveTime::MIN).and_utc(),
            Self::Instant(instant) => instant.with_timezone(&Utc),
        }
    }

    pub fn admits(&self, started: &DateTime<FixedOffset>) -> bool {
        started.with_timezone(&Utc) >= self.instant()
    }
}
