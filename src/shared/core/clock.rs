// Clock capability: the only place the engine learns the current instant and the local UTC offset.
//
// Purpose
// - Keep "now" and the process timezone out of the pipeline so extraction and submission are deterministic under test.
//
// Notes
// - Offsets are always resolved for a specific instant, so daylight-saving transitions are honored.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Local UTC offset in effect at `instant`.
    fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset;

    /// Offset to attach to a local wall-clock reading. Ambiguous readings take the earlier one,
    /// readings inside a gap fall back to the offset in effect now.
    fn offset_for_local(&self, local: NaiveDateTime) -> FixedOffset;

    fn current_offset(&self) -> FixedOffset {
        self.offset_at(self.now())
    }

    fn now_local(&self) -> DateTime<FixedOffset> {
        let now = self.now();
        now.with_timezone(&self.offset_at(now))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        Local.offset_from_utc_datetime(&instant.naive_utc())
    }

    fn offset_for_local(&self, local: NaiveDateTime) -> FixedOffset {
        Local
            .offset_from_local_datetime(&local)
            .earliest()
            .unwrap_or_else(|| self.current_offset())
    }
}

/// A clock frozen at one instant with one offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    pub fn utc(now: DateTime<Utc>) -> Self {
        Self::new(now, Utc.fix())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn offset_at(&self, _instant: DateTime<Utc>) -> FixedOffset {
        self.offset
    }

    fn offset_for_local(&self, _local: NaiveDateTime) -> FixedOffset {
        self.offset
    }
}

#[cfg(test)]
mod shared_clock_tests {
    use super::*;
    use rstest::rstest;

    fn fixed() -> FixedClock {
        let now = Utc.with_ymd_and_hms(2025, 8, 6, 19, 0, 0).unwrap();
        FixedClock::new(now, FixedOffset::west_opt(4 * 3600).unwrap())
    }

    #[rstest]
    fn it_should_report_the_frozen_instant() {
        let clock = fixed();
        assert_eq!(
            clock.now(),
            Utc.with_ymd_and_hms(2025, 8, 6, 19, 0, 0).unwrap()
        );
        assert_eq!(clock.current_offset().local_minus_utc(), -4 * 3600);
    }

    #[rstest]
    fn it_should_render_now_in_the_local_offset() {
        let local = fixed().now_local();
        assert_eq!(local.to_rfc3339(), "2025-08-06T15:00:00-04:00");
    }

    #[rstest]
    fn it_should_build_a_utc_clock() {
        let clock = FixedClock::utc(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(clock.current_offset().local_minus_utc(), 0);
    }

    #[rstest]
    fn it_should_resolve_the_system_offset_for_now() {
        let clock = SystemClock;
        let now = clock.now();
        assert_eq!(
            clock.current_offset().local_minus_utc(),
            clock.offset_at(now).local_minus_utc()
        );
    }
}
