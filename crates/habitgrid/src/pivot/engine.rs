//! The transposition engine.

use crate::input::DailyTable;

use super::grid::HabitTable;

/// Label replacing the date-axis header cell after transposition.
pub const HABITS_LABEL: &str = "Habits";

/// Pivot a date-major table into a habit-major table.
///
/// Dates keep their original file order and become the output columns;
/// habits keep their original header order and become the output rows. No
/// sorting, no deduplication. An empty input yields an empty table — the
/// caller treats that as "no data", not as an error.
pub fn transpose(table: &DailyTable) -> HabitTable {
    if table.is_empty() {
        return HabitTable::default();
    }

    let mut header = Vec::with_capacity(table.rows.len() + 1);
    header.push(HABITS_LABEL.to_string());
    for row in &table.rows {
        header.push(row.first().cloned().unwrap_or_default());
    }

    let mut rows = Vec::with_capacity(table.habit_count());
    for (col, habit) in table.headers.iter().enumerate().skip(1) {
        let mut out = Vec::with_capacity(table.rows.len() + 1);
        out.push(habit.clone());
        for row in &table.rows {
            // Ragged rows surface as empty values, not as failures.
            out.push(row.get(col).cloned().unwrap_or_default());
        }
        rows.push(out);
    }

    HabitTable::new(header, rows)
}
