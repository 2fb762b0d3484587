//! PortDelta CLI
//!
//! Command-line interface for importing monthly holdings and comparing
//! portfolio snapshots

use clap::{Parser, Subcommand};
use portdelta_core::logging_facility;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "portdelta")]
#[command(about = "PortDelta - Portfolio holdings change analysis", long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: config::Settings,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Import holdings CSV exports into the data directory
    Import(commands::import::ImportArgs),
    /// List stored months in chronological order
    Months(commands::months::MonthsArgs),
    /// Compare two months
    Compare(commands::compare::CompareArgs),
    /// Chain comparisons over every month in a range
    Range(commands::range::RangeArgs),
    /// Compare one month with itself or analyze a range
    Analyze(commands::analyze::AnalyzeArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.settings.log_profile.into());

    let result = match cli.command {
        Commands::Import(args) => commands::import::execute(&cli.settings, args),
        Commands::Months(args) => commands::months::execute(&cli.settings, args),
        Commands::Compare(args) => commands::compare::execute(&cli.settings, args),
        Commands::Range(args) => commands::range::execute(&cli.settings, args),
        Commands::Analyze(args) => commands::analyze::execute(&cli.settings, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
