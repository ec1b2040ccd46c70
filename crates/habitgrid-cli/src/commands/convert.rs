//! Convert command - pivot an export and write the transposed CSV.

use std::path::PathBuf;

use colored::Colorize;
use habitgrid::{export_path, sanitize, to_csv, Habitgrid};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Pivoting".cyan().bold(),
        file.display().to_string().white()
    );

    let result = Habitgrid::new().pivot_file(&file)?;

    if result.table.is_empty() {
        println!("{} File contains no data; nothing to write.", "Warning:".yellow().bold());
        return Ok(());
    }

    if verbose {
        println!(
            "  {} dates x {} habits ({})",
            result.source.date_count,
            result.source.habit_count,
            result.source.hash
        );
    }

    let output_path = output.unwrap_or_else(|| export_path(&file));

    let csv = to_csv(&sanitize(&result.table))?;
    std::fs::write(&output_path, csv)
        .map_err(|e| format!("Failed to write {}: {}", output_path.display(), e))?;

    println!(
        "{} {} ({} rows, {} columns)",
        "Saved to".green().bold(),
        output_path.display().to_string().white(),
        result.table.habit_count() + 1,
        result.table.date_count() + 1
    );

    Ok(())
}
