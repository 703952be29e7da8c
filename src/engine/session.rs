//! Session state for the focus timer.
//!
//! A session is either focusing or breathing. The focus countdown only
//! moves while the session is in focus mode with the timer running; the
//! breathing countdown only moves in breathing mode.

/// Default focus session length: 90 minutes.
pub const DEFAULT_FOCUS_SECONDS: i64 = 90 * 60;

/// Length of a breathing break, in seconds.
pub const BREATH_SECONDS: i64 = 10;

/// What the session is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Counting down focus time.
    Focus,
    /// Paused for a breathing break.
    Breathing,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Focus => write!(f, "Focus"),
            Self::Breathing => write!(f, "Breathing"),
        }
    }
}

/// The focus/breathing state machine.
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    total_seconds: i64,
    time_left: i64,
    breath_countdown: i64,
    running: bool,
}

impl Session {
    /// Create a session with the given focus duration.
    #[must_use]
    pub const fn new(focus_seconds: i64) -> Self {
        Self {
            mode: Mode::Focus,
            total_seconds: focus_seconds,
            time_left: focus_seconds,
            breath_countdown: BREATH_SECONDS,
            running: false,
        }
    }

    /// Start the focus countdown.
    ///
    /// No-op while already running or once the countdown has reached zero.
    pub fn start(&mut self) {
        if self.time_left > 0 {
            self.running = true;
        }
    }

    /// Stop the focus countdown without resetting it.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance the focus countdown by one second.
    ///
    /// Only moves in focus mode while running. Returns true when the
    /// countdown just reached zero; the timer stops at that point.
    pub fn tick_focus(&mut self) -> bool {
        if self.mode != Mode::Focus || !self.running || self.time_left == 0 {
            return false;
        }

        self.time_left -= 1;
        if self.time_left == 0 {
            self.running = false;
            true
        } else {
            false
        }
    }

    /// Enter breathing mode and reset the breathing countdown.
    pub fn begin_breath(&mut self) {
        self.mode = Mode::Breathing;
        self.breath_countdown = BREATH_SECONDS;
    }

    /// Advance the breathing countdown by one second.
    ///
    /// Returns true when the break just finished and the session switched
    /// back to focus mode.
    pub fn tick_breath(&mut self) -> bool {
        if self.mode != Mode::Breathing {
            return false;
        }

        if self.breath_countdown > 1 {
            self.breath_countdown -= 1;
            false
        } else {
            self.mode = Mode::Focus;
            self.breath_countdown = BREATH_SECONDS;
            true
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Seconds left in the focus countdown.
    #[must_use]
    pub const fn time_left(&self) -> i64 {
        self.time_left
    }

    /// Seconds left in the current breathing break.
    #[must_use]
    pub const fn breath_countdown(&self) -> i64 {
        self.breath_countdown
    }

    /// Whether the focus countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the breathing break is on its final second.
    ///
    /// The UI shows the "back to focus" prompt during this tick.
    #[must_use]
    pub fn breath_ending(&self) -> bool {
        self.mode == Mode::Breathing && self.breath_countdown == 1
    }

    /// Focus progress as a fraction (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        1.0 - (self.time_left as f64 / self.total_seconds as f64)
    }

    /// Format the remaining focus time as MM:SS.
    #[must_use]
    pub fn format_time_left(&self) -> String {
        format_mmss(self.time_left)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_SECONDS)
    }
}

/// Format a second count as MM:SS.
#[must_use]
pub fn format_mmss(seconds: i64) -> String {
    let total = seconds.abs();
    let minutes = total / 60;
    let secs = total % 60;
    format!("{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::default();
        assert_eq!(session.mode(), Mode::Focus);
        assert_eq!(session.time_left(), 5400);
        assert_eq!(session.breath_countdown(), BREATH_SECONDS);
        assert!(!session.is_running());
    }

    #[test]
    fn test_focus_tick_requires_running() {
        let mut session = Session::new(60);
        assert!(!session.tick_focus());
        assert_eq!(session.time_left(), 60);

        session.start();
        assert!(!session.tick_focus());
        assert_eq!(session.time_left(), 59);
    }

    #[test]
    fn test_focus_countdown_stops_at_zero() {
        let mut session = Session::new(3);
        session.start();

        assert!(!session.tick_focus());
        assert!(!session.tick_focus());
        assert!(session.tick_focus());

        assert_eq!(session.time_left(), 0);
        assert!(!session.is_running());

        // Restarting a finished countdown is a no-op.
        session.start();
        assert!(!session.is_running());
        assert!(!session.tick_focus());
    }

    #[test]
    fn test_focus_frozen_during_breathing() {
        let mut session = Session::new(60);
        session.start();
        session.begin_breath();

        assert!(!session.tick_focus());
        assert_eq!(session.time_left(), 60);
    }

    #[test]
    fn test_breath_runs_ten_ticks() {
        let mut session = Session::new(60);
        session.begin_breath();
        assert_eq!(session.mode(), Mode::Breathing);
        assert_eq!(session.breath_countdown(), 10);

        for expected in (1..=9).rev() {
            assert!(!session.tick_breath());
            assert_eq!(session.breath_countdown(), expected);
        }

        assert!(session.breath_ending());
        assert!(session.tick_breath());
        assert_eq!(session.mode(), Mode::Focus);
        assert_eq!(session.breath_countdown(), BREATH_SECONDS);
    }

    #[test]
    fn test_breath_tick_noop_in_focus_mode() {
        let mut session = Session::new(60);
        assert!(!session.tick_breath());
        assert_eq!(session.breath_countdown(), BREATH_SECONDS);
    }

    #[test]
    fn test_progress() {
        let mut session = Session::new(100);
        session.start();
        assert!(session.progress().abs() < f64::EPSILON);

        for _ in 0..50 {
            session.tick_focus();
        }
        assert!((session.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(5400), "90:00");
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(0), "00:00");
    }
}
