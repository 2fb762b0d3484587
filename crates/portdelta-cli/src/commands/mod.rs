//! Subcommand implementations
//!
//! Each module exposes an `Args` struct and an `execute` function.

pub mod analyze;
pub mod compare;
pub mod import;
pub mod months;
pub mod range;

use clap::{Args, ValueEnum};
use portdelta_core::range::{PairFailurePolicy, RangeOptions};
use portdelta_engine::EngineQueryResult;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// What to do when one month pair of a range cannot be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnPairFailure {
    /// Leave the pair out and continue
    Skip,
    /// Abort the whole range
    Fail,
}

/// Output options shared by the analysis commands
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Print the structured result as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

/// Range options shared by `range` and `analyze`
#[derive(Debug, Args)]
pub struct RangeOptionArgs {
    #[arg(long, value_enum, default_value_t = OnPairFailure::Skip)]
    pub on_pair_failure: OnPairFailure,

    /// Compare month pairs in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl RangeOptionArgs {
    pub fn to_options(&self) -> RangeOptions {
        let policy = match self.on_pair_failure {
            OnPairFailure::Skip => PairFailurePolicy::SkipFailedPair,
            OnPairFailure::Fail => PairFailurePolicy::FailRange,
        };
        RangeOptions::new(policy).with_parallel(self.parallel)
    }
}

/// Print a query result as text or JSON
pub fn print_result(result: &EngineQueryResult, output: &OutputArgs) -> CommandResult {
    match result {
        EngineQueryResult::Months(months) => {
            if output.json {
                println!("{}", serde_json::to_string_pretty(months)?);
            } else if months.is_empty() {
                println!("No data available.");
            } else {
                for month in months {
                    println!("{}", month);
                }
            }
        }
        EngineQueryResult::Comparison(report) => {
            if output.json {
                println!("{}", serde_json::to_string_pretty(&report.result)?);
            } else {
                print!("{}", report.human_summary);
            }
        }
        EngineQueryResult::Range(report) => {
            if output.json {
                println!("{}", serde_json::to_string_pretty(&report.result)?);
            } else {
                print!("{}", report.human_summary);
            }
        }
    }
    Ok(())
}
