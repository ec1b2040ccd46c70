//! Show command - render the pivoted table in the terminal.

use std::path::PathBuf;

use colored::{ColoredString, Colorize};
use habitgrid::{classify, date_header, format_cell, DisplayValue, GlyphKind, Habitgrid};

/// Width of each date column.
const DATE_COL: usize = 9;

pub fn run(file: PathBuf, width: usize, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let result = Habitgrid::new().pivot_file(&file)?;

    if result.table.is_empty() {
        println!("{} File contains no data.", "Warning:".yellow().bold());
        return Ok(());
    }

    if verbose {
        println!(
            "{} {} ({} dates x {} habits)",
            "Showing".cyan().bold(),
            result.source.file.white(),
            result.source.date_count,
            result.source.habit_count
        );
        println!();
    }

    // Header: "Habits" then "TUE 30"-style date columns. Pad before
    // coloring - ANSI escapes would otherwise count toward the width.
    print!("{}", pad_left(&result.table.header[0], width).bold());
    for date in result.table.dates() {
        let label = match date_header(date) {
            Some(h) => format!("{} {}", h.weekday, h.day),
            None => truncate(date, DATE_COL - 1),
        };
        print!("{}", pad_right(&label, DATE_COL).dimmed());
    }
    println!();

    for i in 0..result.table.habit_count() {
        let name = result.table.habit_name(i).unwrap_or_default().to_string();
        print!("{}", pad_left(&truncate(&name, width.saturating_sub(1)), width).normal());
        for value in result.table.values(i) {
            print!("{}", render_cell(value, &name));
        }
        println!();
    }

    Ok(())
}

/// Render one padded cell with its classification's glyph or scaled text.
fn render_cell(value: &str, habit: &str) -> ColoredString {
    let display = format_cell(&classify(value, habit));
    match &display {
        DisplayValue::Glyph(GlyphKind::Check) => pad_right("✓", DATE_COL).green().bold(),
        DisplayValue::Glyph(GlyphKind::Cross) => pad_right("✗", DATE_COL).dimmed(),
        DisplayValue::Glyph(GlyphKind::Dot) => pad_right("·", DATE_COL).dimmed(),
        DisplayValue::Number { text, unit } => {
            let rendered = match unit {
                Some(u) => format!("{} {}", text, u),
                None => text.clone(),
            };
            let padded = pad_right(&truncate(&rendered, DATE_COL - 1), DATE_COL);
            // Zero metrics are shown, just de-emphasized.
            if display.is_zero() {
                padded.dimmed()
            } else {
                padded.normal()
            }
        }
        DisplayValue::Text(s) => pad_right(&truncate(s, DATE_COL - 1), DATE_COL).normal(),
    }
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{:<width$}", s)
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{:>width$}", s)
}

/// Truncate for column width; the underlying value stays whole.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
