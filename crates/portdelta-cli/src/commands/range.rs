//! Range analysis over consecutive months

use clap::Args;
use portdelta_engine::{apply_engine_query, EngineQuery};

use super::{print_result, CommandResult, OutputArgs, RangeOptionArgs};
use crate::config::Settings;

#[derive(Debug, Args)]
pub struct RangeArgs {
    /// First month of the range
    pub start: String,

    /// Last month of the range (inclusive)
    pub end: String,

    #[command(flatten)]
    pub range: RangeOptionArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(settings: &Settings, args: RangeArgs) -> CommandResult {
    let store = settings.open_store()?;
    let query = EngineQuery::CompareRange {
        start: args.start,
        end: args.end,
        options: args.range.to_options(),
    };
    let result = apply_engine_query(query, &store)?;
    print_result(&result, &args.output)
}
