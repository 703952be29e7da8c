//! Terminal user interface for ninety.
//!
//! Full-screen timer with a Today view and a History view, built with
//! ratatui and crossterm. The UI drives the engine with one tick per
//! elapsed wall-clock second.

mod app;
mod event;
mod ui;

pub use app::{App, View};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::engine::FocusEngine;
use crate::error::NinetyError;
use crate::sound::Chime;

/// Run the timer UI until the user quits.
///
/// Pending break timers are cancelled on the way out so nothing outlives
/// the session.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or draw.
pub fn run(engine: &mut FocusEngine, chime: &Chime) -> Result<(), NinetyError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| NinetyError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| NinetyError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| NinetyError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(engine, chime);
    let result = run_app(&mut terminal, &mut app);

    app.shutdown();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<(), NinetyError> {
    const TICK: Duration = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| NinetyError::Terminal(format!("Failed to draw: {e}")))?;

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if let Some(action) = event::handle_events(app, timeout)? {
            match action {
                event::Action::Quit => break,
                event::Action::Start => app.start(),
                event::Action::Pause => app.pause(),
            }
        }

        // Catch up on every full second that has elapsed, so a burst of
        // input events cannot stall the countdown.
        while last_tick.elapsed() >= TICK {
            app.tick();
            last_tick += TICK;
        }
    }

    Ok(())
}
