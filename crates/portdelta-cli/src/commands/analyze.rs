//! Single-month or range analysis, chosen by the bounds

use clap::Args;
use portdelta_engine::{apply_engine_query, EngineQuery};

use super::{print_result, CommandResult, OutputArgs, RangeOptionArgs};
use crate::config::Settings;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    pub start: String,

    /// Same as start for a self-comparison
    pub end: String,

    #[command(flatten)]
    pub range: RangeOptionArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(settings: &Settings, args: AnalyzeArgs) -> CommandResult {
    let store = settings.open_store()?;
    let query = EngineQuery::Analyze {
        start: args.start,
        end: args.end,
        options: args.range.to_options(),
    };
    let result = apply_engine_query(query, &store)?;
    print_result(&result, &args.output)
}
