use crate::modules::worklog_sync::adapters::outbound::in_memory_interval_export::InMemoryIntervalExport;
use crate::modules::worklog_sync::adapters::outbound::in_memory_switch_log::{
    InMemorySwitchLog, SwitchRecord,
};
use crate::modules::worklog_sync::adapters::outbound::in_memory_worklog_remote::InMemoryWorklogRemote;
use crate::modules::worklog_sync::core::identity::SubstringIdentityMatcher;
use crate::modules::worklog_sync::core::policy::SyncPolicy;
use crate::modules::worklog_sync::core::sync_result::SyncStatus;
use crate::modules::worklog_sync::use_cases::list_intervals::handler::DateRange;
use crate::shell::state::{AppState, Ports};
use crate::tests::fixtures::clock::eastern_summer_clock;
use crate::tests::fixtures::records::{load_export_fixture, raw_record};
use crate::tests::fixtures::state::make_test_state;
use crate::tests::fixtures::worklogs::AUTHOR;
use chrono::{TimeZone, Utc};
use std::sync::Arc;

fn august_sixth() -> DateRange {
    DateRange::parse("2025-08-06", "2025-08-06").unwrap()
}

#[tokio::test]
async fn lists_syncs_and_then_skips_the_fixture_export() {
    let remote = Arc::new(InMemoryWorklogRemote::new(AUTHOR));
    let state = make_test_state(remote.clone());

    let listed = state.list_intervals.list(august_sixth()).await;
    let mut tickets: Vec<&str> = listed.iter().map(|v| v.interval.ticket.as_str()).collect();
    tickets.sort_unstable();
    assert_eq!(tickets, vec!["ABC-123", "OPS-42"]);
    assert!(listed.iter().all(|v| !v.has_worklog));

    let intervals = listed.into_iter().map(|v| v.interval).collect();
    let first = state.sync_batch.sync_batch(intervals).await;
    assert_eq!(first.summary.total, 2);
    assert_eq!(first.summary.success, 2);
    let abc = first.results.iter().find(|r| r.ticket == "ABC-123").unwrap();
    assert_eq!(abc.message, "Successfully synced 1h 1m to ABC-123");
    assert_eq!(abc.comment_used, "Time tracked via Timewarrior sync");

    let submissions = remote.submissions().await;
    assert_eq!(submissions.len(), 2);
    let abc_submission = submissions
        .iter()
        .find(|s| s.ticket_id == "ABC-123")
        .unwrap();
    assert_eq!(abc_submission.time_spent_seconds, 3700);
    assert_eq!(abc_submission.started.to_rfc3339(), "2025-08-06T09:00:00-04:00");

    let relisted = state.list_intervals.list(august_sixth()).await;
    assert!(relisted.iter().all(|v| v.has_worklog));

    let intervals = relisted.into_iter().map(|v| v.interval).collect();
    let second = state.sync_batch.sync_batch(intervals).await;
    assert_ne!(second.batch_id, first.batch_id);
    assert_eq!(second.summary.success, 0);
    assert_eq!(second.summary.failed, 2);
    for result in &second.results {
        assert_eq!(result.status, SyncStatus::Duplicate);
        assert!(
            result
                .message
                .starts_with(&format!("Worklog already exists for {}", result.ticket))
        );
    }
    assert_eq!(remote.submissions().await.len(), 2);
}

#[tokio::test]
async fn carries_switch_notes_into_the_worklog_comment() {
    let remote = Arc::new(InMemoryWorklogRemote::new(AUTHOR));
    let notes = InMemorySwitchLog::new(vec![SwitchRecord {
        from_task: Some("ABC-123".to_string()),
        to_task: "OPS-42".to_string(),
        timestamp: Utc.with_ymd_and_hms(2025, 8, 6, 15, 0, 30).unwrap(),
        note: Some("Rotated staging certificates".to_string()),
    }]);
    let state = AppState::wire(
        Ports {
            export: Arc::new(InMemoryIntervalExport::new(load_export_fixture())),
            notes: Arc::new(notes),
            remote: remote.clone(),
            identity: Arc::new(SubstringIdentityMatcher::new(AUTHOR)),
            clock: Arc::new(eastern_summer_clock()),
        },
        SyncPolicy::default(),
    );

    let intervals = state
        .list_intervals
        .list(august_sixth())
        .await
        .into_iter()
        .map(|v| v.interval)
        .collect();
    let report = state.sync_batch.sync_batch(intervals).await;

    let ops = report.results.iter().find(|r| r.ticket == "OPS-42").unwrap();
    assert_eq!(
        ops.comment_used,
        "Rotated staging certificates. (Synced from Timewarrior)"
    );
    let submitted = remote.submissions().await;
    let ops_submission = submitted.iter().find(|s| s.ticket_id == "OPS-42").unwrap();
    assert_eq!(ops_submission.comment, ops.comment_used);
}

#[tokio::test]
async fn ignores_an_accidental_forty_five_second_start() {
    let remote = Arc::new(InMemoryWorklogRemote::new(AUTHOR));
    let state = AppState::wire(
        Ports {
            export: Arc::new(InMemoryIntervalExport::new(vec![raw_record(
                "20250806T130000Z",
                Some("20250806T130045Z"),
                &["ABC-123"],
            )])),
            notes: Arc::new(InMemorySwitchLog::default()),
            remote: remote.clone(),
            identity: Arc::new(SubstringIdentityMatcher::new(AUTHOR)),
            clock: Arc::new(eastern_summer_clock()),
        },
        SyncPolicy::default(),
    );

    let listed = state.list_intervals.list(august_sixth()).await;
    assert!(listed.is_empty());

    let report = state.sync_batch.sync_batch(vec![]).await;
    assert_eq!(report.summary.total, 0);
    assert!(remote.submissions().await.is_empty());
}
