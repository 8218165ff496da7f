//! Format command

use anyhow::{Context, Result};
use branchsync_core::core_types::RunId;
use branchsync_engine::{format_run, FormatOptions};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// JSON document to canonicalize
    #[arg(long)]
    pub input: PathBuf,

    /// Output file (prints to stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: FormatArgs, run_id: &RunId) -> Result<()> {
    let outcome = format_run(&FormatOptions {
        input_path: args.input,
        output_path: args.output,
    })
    .map_err(|e| e.with_run_id(run_id.clone()))
    .context("format failed")?;

    match &outcome.output_path {
        Some(path) => println!("Formatted document written to {}", path.display()),
        None => println!("{}", outcome.text),
    }

    Ok(())
}
