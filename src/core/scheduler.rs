//! One-shot timer scheduling over a logical second counter.
//!
//! Replaces ad hoc timer callbacks with an explicit, cancelable scheduler.
//! Time is an engine-local monotonic counter advanced once per tick, so
//! scheduled deadlines are exact and fully testable.

/// Handle for a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Pending one-shot timer.
#[derive(Debug, Clone, Copy)]
struct Entry {
    id: u64,
    fires_at: u64,
}

/// One-shot timer scheduler.
///
/// Deadlines are expressed in whole seconds relative to the scheduler's own
/// monotonic counter. `advance` moves the counter forward by one second and
/// returns every timer that came due, in the order it was scheduled.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: u64,
    next_id: u64,
    pending: Vec<Entry>,
}

impl Scheduler {
    /// Create an empty scheduler at second zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds elapsed since the scheduler was created.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Schedule a one-shot timer `delay_secs` from now.
    pub fn schedule_after(&mut self, delay_secs: u64) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Entry {
            id,
            fires_at: self.now + delay_secs,
        });
        TimerHandle(id)
    }

    /// Cancel a pending timer.
    ///
    /// Returns true if the timer was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| e.id != handle.0);
        self.pending.len() < before
    }

    /// Cancel every pending timer.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Advance time by one second and collect the timers that came due.
    pub fn advance(&mut self) -> Vec<TimerHandle> {
        self.now += 1;
        let now = self.now;

        let mut fired = Vec::new();
        self.pending.retain(|e| {
            if e.fires_at <= now {
                fired.push(TimerHandle(e.id));
                false
            } else {
                true
            }
        });

        fired
    }

    /// Number of timers still pending.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Absolute fire time of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|e| e.fires_at).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_at_exact_deadline() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule_after(3);

        assert!(scheduler.advance().is_empty());
        assert!(scheduler.advance().is_empty());
        assert_eq!(scheduler.advance(), vec![handle]);
        assert_eq!(scheduler.now(), 3);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_cancel_pending_timer() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule_after(2);

        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler.advance().is_empty());
        assert!(scheduler.advance().is_empty());
    }

    #[test]
    fn test_multiple_timers_fire_in_schedule_order() {
        let mut scheduler = Scheduler::new();
        let first = scheduler.schedule_after(1);
        let second = scheduler.schedule_after(1);

        assert_eq!(scheduler.advance(), vec![first, second]);
    }

    #[test]
    fn test_next_deadline() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.next_deadline(), None);

        scheduler.schedule_after(10);
        scheduler.schedule_after(5);
        assert_eq!(scheduler.next_deadline(), Some(5));
    }

    #[test]
    fn test_cancel_all() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_after(1);
        scheduler.schedule_after(2);

        scheduler.cancel_all();
        assert_eq!(scheduler.pending_count(), 0);
    }
}
