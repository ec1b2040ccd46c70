//! Date-major source grid and file metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the source export file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of data rows, one per tracked date.
    pub date_count: usize,
    /// Number of habit columns (header width minus the date column).
    pub habit_count: usize,
    /// When the file was processed.
    pub processed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been parsed.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        date_count: usize,
        habit_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            date_count,
            habit_count,
            processed_at: Utc::now(),
        }
    }
}

/// The raw export as parsed: one row per tracked date.
///
/// Column 0 of the header is the date-axis label; columns 1..N name the
/// habits. Column 0 of every data row is a `YYYY-MM-DD` date key. Rows are
/// padded to the header width at parse time, so the grid is rectangular.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTable {
    /// Header row: date-axis label followed by habit names.
    pub headers: Vec<String>,
    /// Data rows in file order (no sorting, no deduplication).
    pub rows: Vec<Vec<String>>,
}

impl DailyTable {
    /// Create a new daily table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// True when the table holds neither a header nor data.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Number of data rows (tracked dates).
    pub fn date_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of habit columns.
    pub fn habit_count(&self) -> usize {
        self.headers.len().saturating_sub(1)
    }

    /// Habit names in header order.
    pub fn habit_names(&self) -> &[String] {
        if self.headers.is_empty() {
            &[]
        } else {
            &self.headers[1..]
        }
    }

    /// Get a specific cell value from the data rows.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }
}
