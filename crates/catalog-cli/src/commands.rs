use anyhow::Result;

use catalog_cli::pipeline::{self, RunOptions, RunResult};

use crate::cli::RunArgs;

pub fn run_catalog(args: &RunArgs) -> Result<RunResult> {
    pipeline::run(&RunOptions {
        input: args.input.clone(),
        output: args.output.clone(),
        dry_run: args.dry_run,
    })
}
