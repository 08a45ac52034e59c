use crate::modules::worklog_sync::core::tracked_interval::RawIntervalRecord;
use std::fs;

/// Seven records: three usable intervals plus a negative span, a lunch break, an untagged
/// record and a 45 second accidental start.
pub fn load_export_fixture() -> Vec<RawIntervalRecord> {
    let json_str = fs::read_to_string("./src/tests/fixtures/json/timew_export.json").unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub fn raw_record(start: &str, end: Option<&str>, tags: &[&str]) -> RawIntervalRecord {
    RawIntervalRecord {
        id: None,
        start: start.to_string(),
        end: end.map(str::to_string),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
    }
}
