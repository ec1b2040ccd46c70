//! Export-time sanitization and CSV serialization.

use std::path::{Path, PathBuf};

use crate::cell::{classify, CellClass};
use crate::error::Result;
use crate::pivot::HabitTable;

/// Blank out cells classified as unknown, leaving everything else raw.
///
/// Downstream consumers expect blank cells for "no data", not the sentinel
/// token used internally. Every row is rewritten, the header included; raw
/// strings pass through untouched otherwise — export preserves data
/// fidelity, never the formatted display value. Idempotent: a sanitized
/// grid sanitizes to itself.
pub fn sanitize(table: &HabitTable) -> HabitTable {
    HabitTable::new(sanitize_row(&table.header), table.rows.iter().map(|r| sanitize_row(r)).collect())
}

fn sanitize_row(row: &[String]) -> Vec<String> {
    let label = row.first().map(String::as_str).unwrap_or_default();
    row.iter()
        .map(|cell| match classify(cell, label) {
            CellClass::Unknown => String::new(),
            _ => cell.clone(),
        })
        .collect()
}

/// Serialize a table as comma-delimited text with quote-on-demand encoding.
pub fn to_csv(table: &HabitTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in table.all_rows() {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Derive the export path from the input file: `<stem>_transposed.csv`.
pub fn export_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{}_transposed.csv", stem))
}
