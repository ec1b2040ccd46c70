//! Integration tests for Habitgrid.

use std::io::Write;
use tempfile::NamedTempFile;

use habitgrid::{
    classify, date_header, export_path, format_cell, sanitize, to_csv, CellClass, DisplayValue,
    GlyphKind, Habitgrid, HabitgridError, MetricKind,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// End-to-End Scenario
// =============================================================================

#[test]
fn test_end_to_end_scenario() {
    let content = "Date,Sleep,Steps\n\
                   2025-01-01,YES_AUTO,6400\n\
                   2025-01-02,NO,4900\n";
    let file = create_test_file(content);

    let result = Habitgrid::new().pivot_file(file.path()).expect("Pivot failed");

    assert_eq!(
        result.table.header,
        vec!["Habits", "2025-01-01", "2025-01-02"]
    );
    assert_eq!(result.table.rows[0], vec!["Sleep", "YES_AUTO", "NO"]);
    assert_eq!(result.table.rows[1], vec!["Steps", "6400", "4900"]);

    // Displayed values: Check, Cross for the Sleep row.
    let sleep: Vec<_> = result.table.rows[0][1..]
        .iter()
        .map(|cell| format_cell(&classify(cell, "Sleep")))
        .collect();
    assert_eq!(sleep[0], DisplayValue::Glyph(GlyphKind::Check));
    assert_eq!(sleep[1], DisplayValue::Glyph(GlyphKind::Cross));

    // "6.4", "4.9" for the Steps row.
    let steps: Vec<_> = result.table.rows[1][1..]
        .iter()
        .map(|cell| format_cell(&classify(cell, "Steps")))
        .collect();
    assert_eq!(
        steps[0],
        DisplayValue::Number {
            text: "6.4".to_string(),
            unit: None
        }
    );
    assert_eq!(
        steps[1],
        DisplayValue::Number {
            text: "4.9".to_string(),
            unit: None
        }
    );
}

#[test]
fn test_export_round_trip() {
    let content = "Date,Sleep,Steps\n\
                   2025-01-01,YES_AUTO,6400\n\
                   2025-01-02,UNKNOWN,4900\n";
    let file = create_test_file(content);

    let result = Habitgrid::new().pivot_file(file.path()).expect("Pivot failed");
    let csv = to_csv(&sanitize(&result.table)).expect("Serialization failed");

    assert_eq!(
        csv,
        "Habits,2025-01-01,2025-01-02\n\
         Sleep,YES_AUTO,\n\
         Steps,6400,4900\n"
    );
}

// =============================================================================
// Shape and Order Properties
// =============================================================================

#[test]
fn test_round_trip_column_identity() {
    // H habits and D dates yield D+1 columns and H+1 rows (header counted).
    let content = "Date,A,B,C\nd1,1,2,3\nd2,4,5,6\n";
    let file = create_test_file(content);

    let result = Habitgrid::new().pivot_file(file.path()).expect("Pivot failed");

    assert_eq!(result.table.header.len(), 2 + 1);
    assert_eq!(result.table.rows.len(), 3);
    assert!(result
        .table
        .rows
        .iter()
        .all(|r| r.len() == result.table.header.len()));
}

#[test]
fn test_order_preservation() {
    let content = "Date,Zebra,Apple\n2025-02-01,a,b\n2025-01-01,c,d\n";
    let file = create_test_file(content);

    let result = Habitgrid::new().pivot_file(file.path()).expect("Pivot failed");

    // Dates keep file order, habits keep header order.
    assert_eq!(result.table.dates(), &["2025-02-01", "2025-01-01"]);
    assert_eq!(result.table.habit_name(0), Some("Zebra"));
    assert_eq!(result.table.habit_name(1), Some("Apple"));
}

// =============================================================================
// Degradation Paths
// =============================================================================

#[test]
fn test_ragged_row_tolerance() {
    let content = "Date,Sleep,Steps\n2025-01-01,NO\n2025-01-02,YES_AUTO,6400\n";
    let file = create_test_file(content);

    let result = Habitgrid::new().pivot_file(file.path()).expect("Pivot failed");

    assert_eq!(result.table.rows[1], vec!["Steps", "", "6400"]);
}

#[test]
fn test_empty_file_yields_empty_table() {
    let file = create_test_file("");

    let result = Habitgrid::new().pivot_file(file.path()).expect("Pivot failed");

    assert!(result.table.is_empty());
}

#[test]
fn test_blank_lines_do_not_become_columns() {
    let content = "Date,Sleep\n\n2025-01-01,NO\n\n";
    let file = create_test_file(content);

    let result = Habitgrid::new().pivot_file(file.path()).expect("Pivot failed");

    assert_eq!(result.table.dates(), &["2025-01-01"]);
}

#[test]
fn test_unterminated_quote_halts_pipeline() {
    let content = "Date,Sleep\n2025-01-01,\"broken\n";
    let file = create_test_file(content);

    let err = Habitgrid::new().pivot_file(file.path()).unwrap_err();

    assert!(matches!(err, HabitgridError::Parse { line: 2, .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Habitgrid::new()
        .pivot_file("/no/such/checkmarks.csv")
        .unwrap_err();

    assert!(matches!(err, HabitgridError::Io { .. }));
}

// =============================================================================
// Classification and Formatting Contract
// =============================================================================

#[test]
fn test_boolean_classification() {
    assert_eq!(classify("yes_auto", "anything"), CellClass::Yes);
    assert_eq!(classify("NO", "anything"), CellClass::No);
    assert_eq!(classify("", "anything"), CellClass::Unknown);
    assert_eq!(classify("unknown", "anything"), CellClass::Unknown);
}

#[test]
fn test_numeric_scaling_exactness() {
    assert_eq!(
        classify("5320", "Sleep Goal"),
        CellClass::Metric {
            kind: MetricKind::SleepGoal,
            value: 5320.0
        }
    );
    let display = format_cell(&classify("5320", "Sleep Goal"));
    assert_eq!(
        display,
        DisplayValue::Number {
            text: "5.32".to_string(),
            unit: Some("hours".to_string())
        }
    );

    let zero = format_cell(&classify("0", "Sleep Goal"));
    assert_eq!(
        zero,
        DisplayValue::Number {
            text: "0".to_string(),
            unit: Some("hours".to_string())
        }
    );

    assert_eq!(
        format_cell(&classify("6400", "Steps")),
        DisplayValue::Number {
            text: "6.4".to_string(),
            unit: None
        }
    );
    assert_eq!(
        format_cell(&classify("82000", "Sleep Score")),
        DisplayValue::Number {
            text: "82".to_string(),
            unit: None
        }
    );
}

// =============================================================================
// Export Normalization
// =============================================================================

#[test]
fn test_export_normalization_idempotence() {
    let content = "Date,Sleep\n2025-01-01,UNKNOWN\n2025-01-02,Unknown\n2025-01-03,\n";
    let file = create_test_file(content);

    let result = Habitgrid::new().pivot_file(file.path()).expect("Pivot failed");

    let once = sanitize(&result.table);
    let twice = sanitize(&once);

    assert_eq!(once, twice);
    // All casings of the sentinel map to empty.
    assert_eq!(once.values(0), &["", "", ""]);
}

#[test]
fn test_export_filename_derivation() {
    let path = export_path(std::path::Path::new("exports/checkmarks.csv"));
    assert_eq!(path, std::path::PathBuf::from("exports/checkmarks_transposed.csv"));
}

// =============================================================================
// Date Headers
// =============================================================================

#[test]
fn test_date_headers_for_display() {
    let header = date_header("2025-12-30").expect("Should parse");
    assert_eq!((header.weekday.as_str(), header.day), ("TUE", 30));

    assert!(date_header("Habits").is_none());
}
