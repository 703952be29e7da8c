//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::NinetyError;
use crate::tui::app::{App, View};

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start the focus countdown.
    Start,
    /// Pause the focus countdown.
    Pause,
}

/// Handle terminal events, waiting at most `timeout`.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App<'_>, timeout: Duration) -> Result<Option<Action>, NinetyError> {
    if event::poll(timeout).map_err(|e| NinetyError::Terminal(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| NinetyError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

                // Timer control
                KeyCode::Char('s') | KeyCode::Enter => return Ok(Some(Action::Start)),
                KeyCode::Char('p') | KeyCode::Char(' ') => return Ok(Some(Action::Pause)),

                // View switching
                KeyCode::Tab => app.toggle_view(),
                KeyCode::Char('1') => app.show_view(View::Today),
                KeyCode::Char('2') => app.show_view(View::History),

                // Help
                KeyCode::Char('?') => {
                    app.status = Some(
                        "s:start | p:pause | Tab/1/2:view | q:quit".to_string(),
                    );
                }

                _ => {}
            }
        }
    }

    Ok(None)
}
