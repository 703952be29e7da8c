//! Human-readable output formatting.

use chrono::NaiveDate;
use colored::Colorize;

use crate::engine::{DayRecord, History};

/// Format the end-of-run summary as colored text.
#[must_use]
pub fn format_summary_pretty(history: &History, today: NaiveDate) -> String {
    let mut output = Vec::new();

    output.push("Session summary".bold().to_string());
    output.push("─".repeat(40));

    match history.day(today) {
        Some(day) => output.push(format!(
            "Today: {} of focus, {} breathing {}",
            format!("{} min", day.focus_minutes()).green(),
            day.breath_count,
            plural_breaks(day.breath_count),
        )),
        None => output.push("Today: no focus time recorded".dimmed().to_string()),
    }

    if history.days().len() > 1 {
        output.push(String::new());
        output.push(format_history_pretty(history));
    }

    output.join("\n")
}

/// Format the full history, one line per day in first-seen order.
#[must_use]
pub fn format_history_pretty(history: &History) -> String {
    if history.is_empty() {
        return "No history recorded yet.".dimmed().to_string();
    }

    history
        .days()
        .iter()
        .map(format_day)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_day(day: &DayRecord) -> String {
    format!(
        "{}  {:>4} min  {:>2} {}",
        day.date.format("%Y-%m-%d"),
        day.focus_minutes(),
        day.breath_count,
        plural_breaks(day.breath_count),
    )
}

const fn plural_breaks(count: u32) -> &'static str {
    if count == 1 {
        "break"
    } else {
        "breaks"
    }
}
