//! Graphwalk - search algorithms over small weighted graphs
//!
//! Loads a graph description, runs one traversal or path search and prints
//! the result for a human or as JSON.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphwalk_core::error::{ExitCode as GraphExitCode, GraphError};
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(GraphExitCode::Success),
        Err(e) => {
            match cli.format {
                OutputFormat::Json => eprintln!("{}", e.to_json()),
                OutputFormat::Human if !cli.quiet => eprintln!("error: {}", e),
                OutputFormat::Human => {}
            }
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(code: GraphExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Clap reports its own errors unless JSON output was asked for, in which
/// case every parse failure becomes a usage error envelope.
fn report_parse_error(err: clap::Error) -> ExitCode {
    let informational = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
    if informational || !requests_json(std::env::args().skip(1)) {
        err.exit();
    }

    let error = GraphError::UsageError(err.to_string());
    eprintln!("{}", error.to_json());
    exit_with(error.exit_code())
}

/// Whether raw arguments select `--format json`, read before clap has a `Cli`
fn requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let args: Vec<String> = args.into_iter().collect();
    args.iter().any(|arg| arg == "--format=json")
        || args.windows(2).any(|pair| pair[0] == "--format" && pair[1] == "json")
}
