//! The focus engine.
//!
//! Owns the session state machine, the break scheduler, the delay sampler,
//! and the history recorder. The engine has no notion of wall-clock time
//! beyond the calendar date: callers drive it with one `tick()` per elapsed
//! second, which makes every scheduling property exact under test.

use chrono::NaiveDate;

use crate::core::clock::{Clock, SystemClock};
use crate::core::random::BreakDelays;
use crate::core::scheduler::Scheduler;
use crate::engine::history::{DayRecord, History};
use crate::engine::session::{Mode, Session, DEFAULT_FOCUS_SECONDS};

/// State change produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A breathing break just started. The chime rings on this event.
    BreakStarted,
    /// A breathing break just finished; back to focus.
    BreakEnded,
    /// The focus countdown reached zero and stopped.
    FocusFinished,
}

/// Drives the focus session, breaks, and history.
pub struct FocusEngine {
    session: Session,
    scheduler: Scheduler,
    delays: BreakDelays,
    history: History,
    clock: Box<dyn Clock>,
}

impl FocusEngine {
    /// Create an engine with explicit parts.
    #[must_use]
    pub fn new(focus_seconds: i64, delays: BreakDelays, clock: Box<dyn Clock>) -> Self {
        Self {
            session: Session::new(focus_seconds),
            scheduler: Scheduler::new(),
            delays,
            history: History::new(),
            clock,
        }
    }

    /// Create an engine with the default 90-minute session, OS-seeded
    /// delays, and the system clock.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            DEFAULT_FOCUS_SECONDS,
            BreakDelays::default(),
            Box::new(SystemClock),
        )
    }

    /// Start the focus countdown and schedule a breathing break.
    ///
    /// No-op while already running. Each stopped-to-running transition
    /// schedules a fresh break without cancelling pending ones, matching
    /// the break policy described in `stop`.
    pub fn start(&mut self) {
        if self.session.is_running() {
            return;
        }

        self.session.start();
        if self.session.is_running() {
            self.schedule_break();
        }
    }

    /// Stop the focus countdown.
    ///
    /// Pending break timers are deliberately left scheduled, matching the
    /// reference behavior: a break that was already on its way still
    /// interrupts a paused session.
    pub fn stop(&mut self) {
        self.session.stop();
    }

    /// Cancel every pending break timer.
    ///
    /// Called on teardown so no timer outlives the session.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel_all();
    }

    /// Advance the engine by one second.
    ///
    /// Order within a tick: the second counter moves first, then the
    /// focus countdown, then the breathing countdown, and finally any
    /// break timer that came due takes effect.
    pub fn tick(&mut self) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        let today = self.clock.today();
        let fired = self.scheduler.advance();

        // Aggregate tick: gated only by the running flag.
        if self.session.is_running() {
            self.history.record_focus_second(today);
        }

        if self.session.tick_focus() {
            events.push(EngineEvent::FocusFinished);
        }

        if self.session.tick_breath() {
            self.schedule_break();
            events.push(EngineEvent::BreakEnded);
        }

        for _ in fired {
            self.session.begin_breath();
            self.history.record_breath(today);
            events.push(EngineEvent::BreakStarted);
        }

        events
    }

    fn schedule_break(&mut self) {
        let delay = self.delays.next_delay();
        self.scheduler.schedule_after(delay);
    }

    /// The session state machine.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Recorded history, one entry per day seen.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.session.mode()
    }

    /// Whether the focus countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Today's date according to the engine's clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Today's aggregate, empty if nothing has been recorded yet.
    #[must_use]
    pub fn today_record(&self) -> DayRecord {
        let today = self.today();
        self.history
            .day(today)
            .cloned()
            .unwrap_or_else(|| DayRecord::new(today))
    }

    /// Seconds the engine has been ticked.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.scheduler.now()
    }

    /// Number of break timers still pending.
    #[must_use]
    pub fn pending_breaks(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Absolute engine second at which the next break fires.
    #[must_use]
    pub fn next_break_at(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// Test clock whose date can be flipped mid-run.
    struct ManualClock(Rc<Cell<NaiveDate>>);

    impl Clock for ManualClock {
        fn today(&self) -> NaiveDate {
            self.0.get()
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn engine_with_delay(focus_seconds: i64, delay: u64) -> FocusEngine {
        FocusEngine::new(
            focus_seconds,
            BreakDelays::seeded(1, delay, delay),
            Box::new(SystemClock),
        )
    }

    fn tick_n(engine: &mut FocusEngine, n: u64) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        for _ in 0..n {
            events.extend(engine.tick());
        }
        events
    }

    #[test]
    fn test_break_fires_at_exact_delay() {
        let mut engine = engine_with_delay(5400, 200);
        engine.start();

        let events = tick_n(&mut engine, 199);
        assert!(events.is_empty());
        assert_eq!(engine.mode(), Mode::Focus);

        let events = engine.tick();
        assert_eq!(events, vec![EngineEvent::BreakStarted]);
        assert_eq!(engine.mode(), Mode::Breathing);
        assert_eq!(engine.today_record().breath_count, 1);
    }

    #[test]
    fn test_idempotent_start() {
        let mut engine = engine_with_delay(100, 1000);
        engine.start();
        engine.start();

        assert_eq!(engine.pending_breaks(), 1);

        engine.tick();
        assert_eq!(engine.session().time_left(), 99);
    }

    #[test]
    fn test_breathing_lasts_ten_seconds_then_reschedules() {
        let mut engine = engine_with_delay(5400, 200);
        engine.start();
        tick_n(&mut engine, 200);
        assert_eq!(engine.mode(), Mode::Breathing);
        assert_eq!(engine.pending_breaks(), 0);

        let events = tick_n(&mut engine, 9);
        assert!(events.is_empty());
        assert_eq!(engine.mode(), Mode::Breathing);
        assert!(engine.session().breath_ending());

        let events = engine.tick();
        assert_eq!(events, vec![EngineEvent::BreakEnded]);
        assert_eq!(engine.mode(), Mode::Focus);

        // A new break is pending, exactly one delay away.
        assert_eq!(engine.pending_breaks(), 1);
        assert_eq!(engine.next_break_at(), Some(engine.elapsed_seconds() + 200));
    }

    #[test]
    fn test_rescheduled_delay_stays_in_window() {
        let mut engine = FocusEngine::new(
            5400,
            BreakDelays::seeded(9, 180, 300),
            Box::new(SystemClock),
        );
        engine.start();

        // Run through the first break and its breathing session.
        let mut saw_break_end = false;
        for _ in 0..400 {
            if engine.tick().contains(&EngineEvent::BreakEnded) {
                saw_break_end = true;
                break;
            }
        }
        assert!(saw_break_end);

        let now = engine.elapsed_seconds();
        let next = engine.next_break_at().unwrap();
        assert!((now + 180..=now + 300).contains(&next));
    }

    #[test]
    fn test_focus_seconds_only_accrue_while_running() {
        let mut engine = engine_with_delay(5400, 10_000);
        tick_n(&mut engine, 5);
        assert_eq!(engine.today_record().focus_seconds, 0);

        engine.start();
        tick_n(&mut engine, 7);
        assert_eq!(engine.today_record().focus_seconds, 7);

        engine.stop();
        tick_n(&mut engine, 5);
        assert_eq!(engine.today_record().focus_seconds, 7);
    }

    #[test]
    fn test_focus_seconds_accrue_during_breathing() {
        let mut engine = engine_with_delay(5400, 200);
        engine.start();
        tick_n(&mut engine, 200);

        // The break leaves the running flag set, so the aggregate keeps
        // counting while the countdown itself is frozen.
        assert_eq!(engine.mode(), Mode::Breathing);
        assert!(engine.is_running());
        assert_eq!(engine.today_record().focus_seconds, 200);
        let time_left = engine.session().time_left();

        tick_n(&mut engine, 5);
        assert_eq!(engine.mode(), Mode::Breathing);
        assert_eq!(engine.today_record().focus_seconds, 205);
        assert_eq!(engine.session().time_left(), time_left);
    }

    #[test]
    fn test_full_session_without_breaks() {
        let mut engine = engine_with_delay(5400, 10_000);
        engine.start();

        let events = tick_n(&mut engine, 5399);
        assert!(events.is_empty());

        let events = engine.tick();
        assert_eq!(events, vec![EngineEvent::FocusFinished]);
        assert_eq!(engine.session().time_left(), 0);
        assert!(!engine.is_running());
        assert_eq!(engine.today_record().focus_seconds, 5400);

        // Ticking past zero changes nothing.
        tick_n(&mut engine, 10);
        assert_eq!(engine.session().time_left(), 0);
    }

    #[test]
    fn test_pending_break_survives_pause() {
        let mut engine = engine_with_delay(5400, 200);
        engine.start();
        tick_n(&mut engine, 100);
        engine.stop();

        assert_eq!(engine.pending_breaks(), 1);

        // The break still fires on schedule even though the timer is paused.
        let events = tick_n(&mut engine, 100);
        assert!(events.contains(&EngineEvent::BreakStarted));
        assert_eq!(engine.mode(), Mode::Breathing);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_restart_stacks_break_timers() {
        let mut engine = engine_with_delay(5400, 200);
        engine.start();
        engine.stop();
        engine.start();

        // Reference behavior: each stopped-to-running transition schedules
        // another break, and stop cancels none of them.
        assert_eq!(engine.pending_breaks(), 2);
    }

    #[test]
    fn test_history_splits_on_date_change() {
        let today = Rc::new(Cell::new(date(1)));
        let mut engine = FocusEngine::new(
            5400,
            BreakDelays::seeded(1, 10_000, 10_000),
            Box::new(ManualClock(Rc::clone(&today))),
        );
        engine.start();

        tick_n(&mut engine, 30);
        today.set(date(2));
        tick_n(&mut engine, 20);

        let days = engine.history().days();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date(1));
        assert_eq!(days[0].focus_seconds, 30);
        assert_eq!(days[1].date, date(2));
        assert_eq!(days[1].focus_seconds, 20);
    }

    #[test]
    fn test_breath_counted_even_when_countdown_finished() {
        // Break fires after the focus countdown already hit zero.
        let mut engine = engine_with_delay(100, 200);
        engine.start();
        tick_n(&mut engine, 200);

        assert_eq!(engine.mode(), Mode::Breathing);
        assert_eq!(engine.today_record().breath_count, 1);
        // Focus seconds stopped accruing when the countdown finished.
        assert_eq!(engine.today_record().focus_seconds, 100);
    }

    #[test]
    fn test_shutdown_cancels_pending_breaks() {
        let mut engine = engine_with_delay(5400, 200);
        engine.start();
        engine.shutdown();

        assert_eq!(engine.pending_breaks(), 0);
        let events = tick_n(&mut engine, 300);
        assert!(!events.contains(&EngineEvent::BreakStarted));
    }
}
