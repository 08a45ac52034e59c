use crate::modules::worklog_sync::core::remote_worklog::{RawWorklog, RemoteWorklog};
use crate::shared::core::duration::format_duration;
use chrono::{DateTime, FixedOffset};

pub const AUTHOR: &str = "Dana Developer";

pub struct RawWorklogBuilder {
    inner: RawWorklog,
}

impl Default for RawWorklogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RawWorklogBuilder {
    pub fn new() -> Self {
        Self {
            inner: RawWorklog {
                id: "1".to_string(),
                author: Some(AUTHOR.to_string()),
                started: "2025-08-06T09:00:00.000-0400".to_string(),
                time_spent_seconds: 3600,
                time_spent: "1h 0m".to_string(),
                comment: None,
            },
        }
    }

    pub fn id(mut self, v: &str) -> Self {
        self.inner.id = v.to_string();
        self
    }

    pub fn author(mut self, v: Option<&str>) -> Self {
        self.inner.author = v.map(str::to_string);
        self
    }

    pub fn started(mut self, v: &str) -> Self {
        self.inner.started = v.to_string();
        self
    }

    pub fn time_spent_seconds(mut self, v: i64) -> Self {
        self.inner.time_spent_seconds = v;
        self.inner.time_spent = format_duration(v);
        self
    }

    pub fn comment(mut self, v: &str) -> Self {
        self.inner.comment = Some(v.to_string());
        self
    }

    pub fn build(self) -> RawWorklog {
        self.inner
    }
}

pub struct RemoteWorklogBuilder {
    inner: RemoteWorklog,
}

impl Default for RemoteWorklogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RemoteWorklogBuilder {
    pub fn new() -> Self {
        let raw = RawWorklogBuilder::new().build();
        Self {
            inner: RemoteWorklog::from_raw("ABC-123", AUTHOR.to_string(), raw).unwrap(),
        }
    }

    pub fn id(mut self, v: &str) -> Self {
        self.inner.id = v.to_string();
        self
    }

    pub fn ticket_id(mut self, v: &str) -> Self {
        self.inner.ticket_id = v.to_string();
        self
    }

    pub fn started(mut self, v: DateTime<FixedOffset>) -> Self {
        self.inner.started = v;
        self
    }

    pub fn time_spent_seconds(mut self, v: i64) -> Self {
        self.inner.time_spent_seconds = v;
        self.inner.time_spent = format_duration(v);
        self
    }

    pub fn build(self) -> RemoteWorklog {
        self.inner
    }
}
