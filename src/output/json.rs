//! JSON output formatting.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use crate::engine::History;
use crate::error::NinetyError;

/// Format the end-of-run summary as JSON.
///
/// # Errors
///
/// Returns `NinetyError::Json` if serialization fails.
pub fn format_summary_json(history: &History, today: NaiveDate) -> Result<String, NinetyError> {
    let output = json!({
        "today": history.day(today),
        "days": history.days(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `NinetyError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, NinetyError> {
    Ok(serde_json::to_string_pretty(value)?)
}
