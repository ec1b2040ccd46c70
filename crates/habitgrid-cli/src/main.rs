//! Habitgrid CLI - pivot habit-tracker CSV exports.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert { file, output } => commands::convert::run(file, output, cli.verbose),

        Commands::Show { file, width } => commands::show::run(file, width, cli.verbose),

        Commands::Status { file, json } => commands::status::run(file, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
