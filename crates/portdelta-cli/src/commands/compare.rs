//! Compare two months

use clap::Args;
use portdelta_engine::{apply_engine_query, EngineQuery};

use super::{print_result, CommandResult, OutputArgs};
use crate::config::Settings;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Start month, e.g. "January 2024"
    pub start: String,

    /// End month
    pub end: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(settings: &Settings, args: CompareArgs) -> CommandResult {
    let store = settings.open_store()?;
    let query = EngineQuery::Compare {
        start: args.start,
        end: args.end,
    };
    let result = apply_engine_query(query, &store)?;
    print_result(&result, &args.output)
}
