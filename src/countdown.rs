//! Countdown to midnight
//!
//! A one-second tick recomputes the time left in the current local day and
//! gives the lifecycle manager a chance to roll over.

use crate::clock::Clock;
use crate::storage::kv::KeyValueStore;
use crate::storage::lifecycle::Lifecycle;
use chrono::{DateTime, LocalResult, TimeDelta, TimeZone};
use std::time::Duration;

/// Period of the countdown tick
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Time remaining until the next midnight in `now`'s time zone
///
/// Never negative. When a DST shift skips midnight, the next day starts at
/// its first valid local time; when midnight repeats, the earlier one wins.
pub fn time_until_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    let tz = now.timezone();
    let Some(midnight) = now
        .date_naive()
        .succ_opt()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
    else {
        return Duration::ZERO;
    };

    let next = match tz.from_local_datetime(&midnight) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => match tz.from_local_datetime(&(midnight + TimeDelta::hours(1))).earliest() {
            Some(t) => t,
            None => return Duration::ZERO,
        },
    };

    (next - now.clone()).to_std().unwrap_or(Duration::ZERO)
}

/// Render a duration as `HH:MM:SS`
pub fn format_hms(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

/// Result of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub remaining: Duration,
    /// The day changed and the store was purged during this tick
    pub rolled_over: bool,
}

impl Tick {
    pub fn label(&self) -> String {
        format_hms(self.remaining)
    }
}

/// Tick without mutating the lifecycle manager
///
/// Only valid while the day is unchanged; check [`Lifecycle::is_stale`] first.
pub fn observe<S: KeyValueStore, C: Clock>(lifecycle: &Lifecycle<S, C>) -> Tick {
    Tick {
        remaining: time_until_midnight(&lifecycle.clock().now()),
        rolled_over: false,
    }
}

/// Run one tick against the lifecycle manager
pub fn tick<S: KeyValueStore, C: Clock>(lifecycle: &mut Lifecycle<S, C>) -> Tick {
    let rolled_over = lifecycle.rollover();
    let remaining = time_until_midnight(&lifecycle.clock().now());
    Tick {
        remaining,
        rolled_over,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::kv::MemoryKvStore;
    use chrono::{FixedOffset, Local, Utc};

    #[test]
    fn test_time_until_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 30).unwrap();
        assert_eq!(time_until_midnight(&now), Duration::from_secs(30));

        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(time_until_midnight(&now), Duration::from_secs(24 * 3600));
    }

    #[test]
    fn test_time_until_midnight_uses_local_offset() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 6, 1, 22, 0, 0).unwrap();
        assert_eq!(time_until_midnight(&now), Duration::from_secs(2 * 3600));
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_hms(Duration::from_millis(3_723_999)), "01:02:03");
        assert_eq!(format_hms(Duration::from_secs(23 * 3600 + 59 * 60 + 59)), "23:59:59");
    }

    #[test]
    fn test_tick_rolls_over_once() {
        let clock = FixedClock::new(Local.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap());
        let mut lifecycle = Lifecycle::open(MemoryKvStore::new(), clock.clone());
        lifecycle.add_entry("milk");

        let first = tick(&mut lifecycle);
        assert!(!first.rolled_over);
        assert_eq!(first.label(), "00:00:01");

        clock.advance(TimeDelta::seconds(2));
        let second = tick(&mut lifecycle);
        assert!(second.rolled_over);
        assert!(lifecycle.entries().is_empty());

        clock.advance(TimeDelta::seconds(1));
        assert!(!tick(&mut lifecycle).rolled_over);
    }

    #[test]
    fn test_observe_matches_tick_within_a_day() {
        let clock = FixedClock::new(Local.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap());
        let mut lifecycle = Lifecycle::open(MemoryKvStore::new(), clock.clone());

        assert!(!lifecycle.is_stale());
        assert_eq!(observe(&lifecycle), tick(&mut lifecycle));
        assert_eq!(observe(&lifecycle).label(), "01:00:00");

        clock.advance(TimeDelta::hours(2));
        assert!(lifecycle.is_stale());
        assert!(tick(&mut lifecycle).rolled_over);
        assert!(!lifecycle.is_stale());
    }
}
