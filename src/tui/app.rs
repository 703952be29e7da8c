//! Application state for the TUI.

use crate::engine::{EngineEvent, FocusEngine, Mode};
use crate::sound::Chime;

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Countdown, progress, and today's totals.
    Today,
    /// One line per day recorded this run.
    History,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Today => write!(f, "Today"),
            Self::History => write!(f, "History"),
        }
    }
}

/// Application state.
pub struct App<'a> {
    /// The focus engine being driven.
    engine: &'a mut FocusEngine,
    /// Break chime, rung on break start.
    chime: &'a Chime,
    /// Current view.
    pub view: View,
    /// Status message to display.
    pub status: Option<String>,
}

impl<'a> App<'a> {
    /// Create the app around an engine.
    pub fn new(engine: &'a mut FocusEngine, chime: &'a Chime) -> Self {
        Self {
            engine,
            chime,
            view: View::Today,
            status: Some("Press s to start, ? for help".to_string()),
        }
    }

    /// Advance the engine by one second and react to what happened.
    pub fn tick(&mut self) {
        for event in self.engine.tick() {
            match event {
                EngineEvent::BreakStarted => {
                    self.chime.ring();
                    self.status = Some("Breathing break".to_string());
                }
                EngineEvent::BreakEnded => {
                    self.status = Some("Back to focus".to_string());
                }
                EngineEvent::FocusFinished => {
                    self.status = Some("Session complete".to_string());
                }
            }
        }
    }

    /// Start the focus countdown.
    pub fn start(&mut self) {
        if self.engine.is_running() {
            return;
        }
        self.engine.start();
        if self.engine.is_running() {
            self.status = Some("Focusing".to_string());
        }
    }

    /// Pause the focus countdown.
    ///
    /// A break that is already scheduled still fires while paused.
    pub fn pause(&mut self) {
        if !self.engine.is_running() {
            return;
        }
        self.engine.stop();
        self.status = Some("Paused".to_string());
    }

    /// Switch to the other view.
    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Today => View::History,
            View::History => View::Today,
        };
    }

    /// Show a specific view.
    pub fn show_view(&mut self, view: View) {
        self.view = view;
    }

    /// Cancel pending break timers on the way out.
    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }

    /// The engine being displayed.
    #[must_use]
    pub fn engine(&self) -> &FocusEngine {
        self.engine
    }

    /// Whether the breathing overlay should be shown.
    #[must_use]
    pub fn breathing(&self) -> bool {
        self.engine.mode() == Mode::Breathing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BreakDelays;
    use crate::core::SystemClock;

    fn test_engine() -> FocusEngine {
        FocusEngine::new(60, BreakDelays::seeded(1, 5, 5), Box::new(SystemClock))
    }

    #[test]
    fn test_start_and_pause_update_status() {
        let mut engine = test_engine();
        let chime = Chime::disabled();
        let mut app = App::new(&mut engine, &chime);

        app.start();
        assert_eq!(app.status.as_deref(), Some("Focusing"));
        assert!(app.engine().is_running());

        app.pause();
        assert_eq!(app.status.as_deref(), Some("Paused"));
        assert!(!app.engine().is_running());
    }

    #[test]
    fn test_tick_reports_break_start() {
        let mut engine = test_engine();
        let chime = Chime::disabled();
        let mut app = App::new(&mut engine, &chime);

        app.start();
        for _ in 0..5 {
            app.tick();
        }

        assert!(app.breathing());
        assert_eq!(app.status.as_deref(), Some("Breathing break"));
    }

    #[test]
    fn test_toggle_view() {
        let mut engine = test_engine();
        let chime = Chime::disabled();
        let mut app = App::new(&mut engine, &chime);

        assert_eq!(app.view, View::Today);
        app.toggle_view();
        assert_eq!(app.view, View::History);
        app.show_view(View::Today);
        assert_eq!(app.view, View::Today);
    }
}
