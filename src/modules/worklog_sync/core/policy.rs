// Reconciliation thresholds.
//
// Purpose
// - Hold the heuristics that decide what counts as noise, what counts as the same work, and how far
//   a switch note may sit from an interval start.
//
// Notes
// - The defaults are the values the tool has always used. They are policy, so they are configurable.

use chrono::TimeDelta;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncPolicy {
    /// Maximum distance between an interval start and a worklog start for them to be the same work.
    pub start_tolerance: TimeDelta,
    /// Allowed relative difference between an interval duration and a worklog's time spent.
    pub duration_tolerance_ratio: f64,
    /// Intervals shorter than this are accidental start/stop noise.
    pub noise_floor_seconds: i64,
    /// Half-width of the window used to find a switch note around an interval start.
    pub note_window: TimeDelta,
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self {
            start_tolerance: TimeDelta::minutes(5),
            duration_tolerance_ratio: 0.10,
            noise_floor_seconds: 60,
            note_window: TimeDelta::minutes(1),
        }
    }
}
