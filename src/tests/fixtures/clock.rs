use crate::shared::core::clock::FixedClock;
use chrono::{FixedOffset, TimeZone, Utc};

/// 2025-08-06T20:00:00Z on a machine running at UTC-4 (US Eastern, daylight time).
pub fn eastern_summer_clock() -> FixedClock {
    FixedClock::new(
        Utc.with_ymd_and_hms(2025, 8, 6, 20, 0, 0).unwrap(),
        FixedOffset::west_opt(4 * 3600).unwrap(),
    )
}
