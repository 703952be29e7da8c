//! Per-day focus history.
//!
//! Holds one aggregate per calendar date for the lifetime of the process.
//! Nothing is persisted; a fresh run starts with an empty history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accumulated focus time and break count for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Calendar date in the process-local time zone.
    pub date: NaiveDate,
    /// Seconds of focus recorded on this date.
    pub focus_seconds: u64,
    /// Breathing breaks taken on this date.
    pub breath_count: u32,
}

impl DayRecord {
    /// Empty record for a date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            focus_seconds: 0,
            breath_count: 0,
        }
    }

    /// Whole minutes of focus recorded.
    #[must_use]
    pub const fn focus_minutes(&self) -> u64 {
        self.focus_seconds / 60
    }
}

/// Ordered collection of daily aggregates.
///
/// One entry per distinct date, kept in first-seen order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct History {
    days: Vec<DayRecord>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one second of focus time to the given date.
    pub fn record_focus_second(&mut self, date: NaiveDate) {
        self.entry(date).focus_seconds += 1;
    }

    /// Count one breathing break on the given date.
    pub fn record_breath(&mut self, date: NaiveDate) {
        self.entry(date).breath_count += 1;
    }

    /// The aggregate for a date, inserting an empty one if absent.
    fn entry(&mut self, date: NaiveDate) -> &mut DayRecord {
        if let Some(i) = self.days.iter().position(|d| d.date == date) {
            &mut self.days[i]
        } else {
            self.days.push(DayRecord::new(date));
            // Just pushed, so the vector is non-empty.
            let last = self.days.len() - 1;
            &mut self.days[last]
        }
    }

    /// The aggregate for a date, if one exists.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.iter().find(|d| d.date == date)
    }

    /// All recorded days in first-seen order.
    #[must_use]
    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    /// Whether any day has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
