//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::{App, View};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    // Create layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.view {
        View::Today if app.breathing() => render_breathing(frame, app, chunks[1]),
        View::Today => render_today(frame, app, chunks[1]),
        View::History => render_history(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
}

/// Render the header with the active view name.
fn render_header(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let title = format!(" ninety | {} ", app.view);

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the focus countdown and today's totals.
fn render_today(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Countdown
            Constraint::Length(3), // Progress gauge
            Constraint::Min(0),    // Totals
        ])
        .split(area);

    let session = app.engine().session();

    let state = if session.is_running() {
        Span::styled("focusing", Style::default().fg(Color::Green))
    } else if session.time_left() == 0 {
        Span::styled("done", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("paused", Style::default().fg(Color::DarkGray))
    };

    let countdown = Paragraph::new(Line::from(vec![
        Span::styled(
            session.format_time_left(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        state,
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, chunks[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(session.progress().clamp(0.0, 1.0));

    frame.render_widget(gauge, chunks[1]);

    let today = app.engine().today_record();
    let totals = Paragraph::new(vec![
        Line::from(format!("Focus today:  {} min", today.focus_minutes())),
        Line::from(format!("Breaths:      {}", today.breath_count)),
    ])
    .block(Block::default().borders(Borders::ALL).title(" today "));

    frame.render_widget(totals, chunks[2]);
}

/// Render the breathing break overlay.
fn render_breathing(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let session = app.engine().session();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Breathe... {}s", session.breath_countdown()),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if session.breath_ending() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Eyes open! Back to focus",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let overlay = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );

    frame.render_widget(overlay, area);
}

/// Render the history view, one line per recorded day.
fn render_history(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let history = app.engine().history();

    let items: Vec<ListItem<'_>> = if history.is_empty() {
        vec![ListItem::new(Span::styled(
            "Nothing recorded yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        history
            .days()
            .iter()
            .map(|day| {
                let line = Line::from(vec![
                    Span::styled(
                        day.date.format("%Y-%m-%d").to_string(),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(format!("  focus {} min", day.focus_minutes())),
                    Span::styled(
                        format!("  breaths {}", day.breath_count),
                        Style::default().fg(Color::Blue),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" history (this run) "),
    );

    frame.render_widget(list, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("s:start | p:pause | Tab:view | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
