//! Output formatting for ninety.
//!
//! Formats the session summary and history either as colored text or as
//! JSON for scripting.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::engine::History;
use crate::error::NinetyError;

pub use json::{format_summary_json, to_json};
pub use pretty::{format_history_pretty, format_summary_pretty};

/// Format the end-of-run summary based on output format.
///
/// # Errors
///
/// Returns `NinetyError::Json` if JSON serialization fails.
pub fn format_summary(
    history: &History,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, NinetyError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(history, today)),
        OutputFormat::Json => format_summary_json(history, today),
    }
}
