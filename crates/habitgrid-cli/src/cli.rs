//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Habitgrid: pivot habit-tracker CSV exports
#[derive(Parser)]
#[command(name = "habitgrid")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pivot a CSV export and write the cleaned transposed CSV
    Convert {
        /// Path to the CSV export (rows = dates, columns = habits)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: <file>_transposed.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the pivoted table in the terminal
    Show {
        /// Path to the CSV export
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Width of the habit-name column
        #[arg(long, default_value = "20")]
        width: usize,
    },

    /// Show source metadata and classification summary
    Status {
        /// Path to the CSV export
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
