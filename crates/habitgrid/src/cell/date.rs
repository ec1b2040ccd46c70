//! Display headers for date columns.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A date column header broken into its display parts, e.g. `TUE` / `30`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateHeader {
    /// Uppercase three-letter day name, fixed English locale.
    pub weekday: String,
    /// Day of month.
    pub day: u32,
}

/// Parse a `YYYY-MM-DD` date key into its display header.
///
/// Returns `None` for anything else; the renderer falls back to the raw
/// string.
pub fn date_header(value: &str) -> Option<DateHeader> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    Some(DateHeader {
        weekday: date.format("%a").to_string().to_uppercase(),
        day: date.day(),
    })
}
