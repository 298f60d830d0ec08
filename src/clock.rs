//! Timestamp sources for event times
//!
//! All timestamps are milliseconds on a monotonic timeline.

use std::sync::OnceLock;
use std::time::Instant;

/// Process-wide origin of the uptime timeline
static ORIGIN: OnceLock<Instant> = OnceLock::new();

/// Source of the current monotonic time
pub trait Clock {
    /// Current time in milliseconds
    fn now_millis(&self) -> i64;
}

/// Monotonic clock counting milliseconds since its first use in this process
///
/// Readings start at 1 so a resolved event time is never mistaken for an
/// unset one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UptimeClock;

impl UptimeClock {
    /// Start the timeline now if nothing has read it yet
    pub fn init() {
        ORIGIN.get_or_init(Instant::now);
    }
}

impl Clock for UptimeClock {
    fn now_millis(&self) -> i64 {
        let origin = ORIGIN.get_or_init(Instant::now);
        origin.elapsed().as_millis() as i64 + 1
    }
}

/// Clock frozen at a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_is_positive_and_monotonic() {
        let clock = UptimeClock;
        let first = clock.now_millis();
        let second = clock.now_millis();
        assert!(first > 0);
        assert!(second >= first);
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(4242).now_millis(), 4242);
    }
}
