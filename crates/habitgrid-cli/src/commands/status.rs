//! Status command - show source metadata and classification summary.

use std::path::PathBuf;

use colored::Colorize;
use habitgrid::Habitgrid;

pub fn run(file: PathBuf, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let result = Habitgrid::new().pivot_file(&file)?;

    if json_output {
        let status = serde_json::json!({
            "source": result.source,
            "summary": result.summary,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Status for".cyan().bold(),
        result.source.file.white()
    );
    println!();

    println!("{}", "Source:".yellow().bold());
    println!("  Size:   {} bytes", result.source.size_bytes);
    println!("  Hash:   {}", result.source.hash.dimmed());
    println!("  Dates:  {}", result.source.date_count.to_string().white());
    println!("  Habits: {}", result.source.habit_count.to_string().white());
    println!();

    if result.table.is_empty() {
        println!("{}", "No data rows - nothing to summarize.".yellow());
        return Ok(());
    }

    let totals = &result.summary.totals;
    println!("{}", "Cells:".yellow().bold());
    println!("  Done:     {}", totals.yes.to_string().green());
    println!("  Not done: {}", totals.no.to_string().red());
    println!("  No data:  {}", totals.unknown.to_string().dimmed());
    println!("  Metrics:  {}", totals.metric.to_string().blue());
    println!("  Other:    {}", totals.text.to_string().white());

    if verbose {
        println!();
        println!("{}", "Per habit:".yellow().bold());
        for (habit, counts) in &result.summary.by_habit {
            println!(
                "  {:20} {} done, {} not done, {} missing",
                habit,
                counts.yes.to_string().green(),
                counts.no.to_string().red(),
                counts.unknown.to_string().dimmed()
            );
        }
    }

    Ok(())
}
