//! Wall-clock date source.
//!
//! History entries are keyed by calendar date. The engine reads the date
//! through this trait so tests can move the calendar without waiting for
//! midnight.

use chrono::NaiveDate;

/// Source of the current calendar date.
pub trait Clock {
    /// The current date in the process-local time zone.
    fn today(&self) -> NaiveDate;
}

/// Date source backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_matches_local_date() {
        let clock = SystemClock;
        assert_eq!(clock.today(), chrono::Local::now().date_naive());
    }
}
