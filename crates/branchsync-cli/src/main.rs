//! branchsync CLI
//!
//! Compares a fresh JSON export against the stored snapshot, reports the
//! differences and replaces the snapshot with the canonical export.

use branchsync_core::core_types::RunId;
use branchsync_core::logging_facility::{self, Profile};
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "branchsync")]
#[command(about = "branchsync - keyed JSON snapshot comparison", long_about = None)]
struct Cli {
    /// Emit JSON structured logs on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare the new export against the snapshot and update it
    Compare(commands::compare::CompareArgs),
    /// Canonicalize a single JSON document
    Format(commands::format::FormatArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let run_id = RunId::new();
    let span = tracing::info_span!("run", run_id = %run_id);
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args, &run_id),
        Commands::Format(args) => commands::format::execute(args, &run_id),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
