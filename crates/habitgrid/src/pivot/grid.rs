//! The pivoted, display-ready grid.

use serde::{Deserialize, Serialize};

/// The pivoted table: one row per habit, one column per date.
///
/// `header[0]` is the literal `"Habits"` label; `header[1..]` are the date
/// keys in original file order. Each row is `[habit_name, value_1, ...,
/// value_M]` aligned to the header's dates. Every row has the header's
/// length. Duplicate habit names stay distinct rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitTable {
    /// Header row: "Habits" followed by date keys.
    pub header: Vec<String>,
    /// One row per habit, in original header order.
    pub rows: Vec<Vec<String>>,
}

impl HabitTable {
    /// Create a new habit table.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// True when the table holds no data at all.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    /// Number of habit rows.
    pub fn habit_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of date columns.
    pub fn date_count(&self) -> usize {
        self.header.len().saturating_sub(1)
    }

    /// Date keys in display order.
    pub fn dates(&self) -> &[String] {
        if self.header.is_empty() {
            &[]
        } else {
            &self.header[1..]
        }
    }

    /// The habit name labeling a row.
    pub fn habit_name(&self, row: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.first().map(|s| s.as_str()))
    }

    /// A habit row's values in date order, without the name cell.
    pub fn values(&self, row: usize) -> &[String] {
        match self.rows.get(row) {
            Some(r) if !r.is_empty() => &r[1..],
            _ => &[],
        }
    }

    /// All rows including the header, for serialization.
    pub fn all_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        std::iter::once(&self.header)
            .filter(|h| !h.is_empty())
            .chain(self.rows.iter())
    }
}
