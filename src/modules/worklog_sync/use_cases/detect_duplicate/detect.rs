// Decides whether a candidate interval is already represented by one of our worklogs.
//
// Rules
// - Starts within `start_tolerance` of each other (inclusive).
// - Time spent differs from the candidate duration by strictly less than
//   `duration_tolerance_ratio` of the candidate duration. A zero-length candidate never matches.
// - First worklog satisfying both wins; there is no ranking.

use crate::modules::worklog_sync::core::policy::SyncPolicy;
use crate::modules::worklog_sync::core::remote_worklog::RemoteWorklog;
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateCandidate<'a> {
    pub ticket_id: &'a str,
    pub start: DateTime<FixedOffset>,
    pub duration_seconds: i64,
}

pub fn find_duplicate<'w>(
    candidate: &DuplicateCandidate<'_>,
    worklogs: &'w [RemoteWorklog],
    policy: &SyncPolicy,
) -> Option<&'w RemoteWorklog> {
    if candidate.duration_seconds <= 0 {
        return None;
    }
    worklogs
        .iter()
        .filter(|worklog| worklog.ticket_id == candidate.ticket_id)
        .find(|worklog| {
            starts_match(candidate, worklog, policy) && durations_match(candidate, worklog, policy)
        })
}

pub fn is_duplicate(
    candidate: &DuplicateCandidate<'_>,
    worklogs: &[RemoteWorklog],
    policy: &SyncPolicy,
) -> bool {
    find_duplicate(candidate, worklogs, policy).is_some()
}

fn starts_match(
    candidate: &DuplicateCandidate<'_>,
    worklog: &RemoteWorklog,
    policy: &SyncPolicy,
) -> bool {
    (worklog.started - candidate.start).abs() <= policy.start_tolerance
}

fn durations_match(
    candidate: &DuplicateCandidate<'_>,
    worklog: &RemoteWorklog,
    policy: &SyncPolicy,
) -> bool {
    let difference = (worklog.time_spent_seconds - candidate.duration_seconds).abs() as f64;
    difference < policy.duration_tolerance_ratio * candidate.duration_seconds as f64
}

#[cfg(test)]
mod worklog_sync_detect_duplicate_tests {
    use super::*;
    use crate::tests::fixtures::worklogs::RemoteWorklogBuilder;
    use chrono::{TimeDelta, TimeZone};
    use rstest::{fixture, rstest};

    #[fixture]
    fn start() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(4 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 8, 6, 9, 0, 0)
            .unwrap()
    }

    fn candidate(start: DateTime<FixedOffset>, duration_seconds: i64) -> DuplicateCandidate<'static> {
        DuplicateCandidate {
            ticket_id: "ABC-123",
            start,
            duration_seconds,
        }
    }

    fn worklog_at(started: DateTime<FixedOffset>, seconds: i64) -> RemoteWorklog {
        RemoteWorklogBuilder::new()
            .started(started)
            .time_spent_seconds(seconds)
            .build()
    }

    #[rstest]
    #[case(TimeDelta::seconds(4 * 60 + 59), true)]
    #[case(TimeDelta::seconds(5 * 60), true)]
    #[case(TimeDelta::seconds(5 * 60 + 1), false)]
    #[case(TimeDelta::seconds(-(4 * 60 + 59)), true)]
    #[case(TimeDelta::seconds(-(5 * 60 + 1)), false)]
    fn it_should_tolerate_clock_skew_up_to_five_minutes(
        start: DateTime<FixedOffset>,
        #[case] skew: TimeDelta,
        #[case] expected: bool,
    ) {
        let worklogs = vec![worklog_at(start + skew, 3600)];
        assert_eq!(
            is_duplicate(&candidate(start, 3600), &worklogs, &SyncPolicy::default()),
            expected
        );
    }

    #[rstest]
    #[case(1099, true)]
    #[case(901, true)]
    #[case(1100, false)]
    #[case(1101, false)]
    #[case(899, false)]
    fn it_should_apply_a_relative_duration_tolerance(
        start: DateTime<FixedOffset>,
        #[case] time_spent_seconds: i64,
        #[case] expected: bool,
    ) {
        let worklogs = vec![worklog_at(start, time_spent_seconds)];
        assert_eq!(
            is_duplicate(&candidate(start, 1000), &worklogs, &SyncPolicy::default()),
            expected
        );
    }

    #[rstest]
    fn it_should_compare_absolute_instants_across_offsets(start: DateTime<FixedOffset>) {
        let same_instant_in_utc = start.with_timezone(&FixedOffset::east_opt(0).unwrap());
        let worklogs = vec![worklog_at(same_instant_in_utc, 3600)];
        assert!(is_duplicate(&candidate(start, 3600), &worklogs, &SyncPolicy::default()));
    }

    #[rstest]
    fn it_should_never_match_a_zero_length_candidate(start: DateTime<FixedOffset>) {
        let worklogs = vec![worklog_at(start, 0)];
        assert!(!is_duplicate(&candidate(start, 0), &worklogs, &SyncPolicy::default()));
    }

    #[rstest]
    fn it_should_ignore_worklogs_on_other_tickets(start: DateTime<FixedOffset>) {
        let worklogs = vec![
            RemoteWorklogBuilder::new()
                .ticket_id("OPS-42")
                .started(start)
                .time_spent_seconds(3600)
                .build(),
        ];
        assert!(!is_duplicate(&candidate(start, 3600), &worklogs, &SyncPolicy::default()));
    }

    #[rstest]
    fn it_should_return_the_first_matching_worklog(start: DateTime<FixedOffset>) {
        let worklogs = vec![
            RemoteWorklogBuilder::new().id("far").started(start + TimeDelta::hours(2)).build(),
            RemoteWorklogBuilder::new()
                .id("first")
                .started(start + TimeDelta::minutes(1))
                .time_spent_seconds(3650)
                .build(),
            RemoteWorklogBuilder::new()
                .id("second")
                .started(start)
                .time_spent_seconds(3600)
                .build(),
        ];
        let found = find_duplicate(&candidate(start, 3700), &worklogs, &SyncPolicy::default());
        assert_eq!(found.map(|w| w.id.as_str()), Some("first"));
    }

    #[rstest]
    fn it_should_find_nothing_in_an_empty_list(start: DateTime<FixedOffset>) {
        assert!(find_duplicate(&candidate(start, 3600), &[], &SyncPolicy::default()).is_none());
    }

    #[rstest]
    fn it_should_use_configured_tolerances(start: DateTime<FixedOffset>) {
        let policy = SyncPolicy {
            start_tolerance: TimeDelta::minutes(1),
            duration_tolerance_ratio: 0.5,
            ..SyncPolicy::default()
        };
        let worklogs = vec![worklog_at(start + TimeDelta::minutes(2), 3600)];
        assert!(!is_duplicate(&candidate(start, 3600), &worklogs, &policy));
        let worklogs = vec![worklog_at(start, 5000)];
        assert!(is_duplicate(&candidate(start, 3600), &worklogs, &policy));
    }
}
