//! List stored months

use clap::Args;
use portdelta_engine::{apply_engine_query, EngineQuery};

use super::{print_result, CommandResult, OutputArgs};
use crate::config::Settings;

#[derive(Debug, Args)]
pub struct MonthsArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(settings: &Settings, args: MonthsArgs) -> CommandResult {
    let store = settings.open_store()?;
    let result = apply_engine_query(EngineQuery::ListMonths, &store)?;
    print_result(&result, &args.output)
}
