use crate::modules::worklog_sync::core::ticket_key::TicketKey;
use crate::modules::worklog_sync::core::tracked_interval::TrackedInterval;
use chrono::{DateTime, FixedOffset, TimeDelta};
use std::fs;

pub struct TrackedIntervalBuilder {
    inner: TrackedInterval,
}

impl Default for TrackedIntervalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TrackedIntervalBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/tracked_interval.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn ticket(mut self, v: &str) -> Self {
        self.inner.ticket = TicketKey::parse(v).unwrap();
        self.inner.tags = vec![v.to_string()];
        self
    }

    pub fn start(mut self, v: DateTime<FixedOffset>) -> Self {
        self.inner.start = v;
        self
    }

    pub fn duration_seconds(mut self, v: i64) -> Self {
        self.inner.duration_seconds = v;
        self
    }

    pub fn tags(mut self, v: &[&str]) -> Self {
        self.inner.tags = v.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn note(mut self, v: &str) -> Self {
        self.inner.note = Some(v.to_string());
        self
    }

    pub fn build(self) -> TrackedInterval {
        let mut interval = self.inner;
        interval.end = interval.start + TimeDelta::seconds(interval.duration_seconds);
        interval
    }
}
