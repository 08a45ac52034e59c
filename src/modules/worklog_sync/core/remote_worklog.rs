// Worklog records as the remote ticketing system reports them, and the shape we send back.

use crate::modules::worklog_sync::core::timestamps::{TimestampError, parse_remote_timestamp};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One worklog exactly as read from the remote side. Author and start are kept raw so that
/// records we cannot interpret are dropped by the fetcher instead of failing the whole read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWorklog {
    pub id: String,
    pub author: Option<String>,
    pub started: String,
    pub time_spent_seconds: i64,
    pub time_spent: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteWorklog {
    pub id: String,
    pub ticket_id: String,
    pub author: String,
    pub started: DateTime<FixedOffset>,
    pub time_spent_seconds: i64,
    pub time_spent: String,
    pub comment: String,
}

impl RemoteWorklog {
    pub fn from_raw(
        ticket_id: &str,
        author: String,
        raw: RawWorklog,
    ) -> Result<Self, TimestampError> {
        Ok(Self {
            started: parse_remote_timestamp(&raw.started)?,
            id: raw.id,
            ticket_id: ticket_id.to_string(),
            author,
            time_spent_seconds: raw.time_spent_seconds,
            time_spent: raw.time_spent,
            comment: raw.comment.unwrap_or_default(),
        })
    }
}

/// A new worklog to be written to the remote system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorklogSubmission {
    pub ticket_id: String,
    pub time_spent_seconds: i64,
    pub started: DateTime<FixedOffset>,
    pub comment: String,
}
