// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use stackgrep::cli::Cli;
use stackgrep::error::ExitCode;

mod cmd_search;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "STACKGREP_LOG";

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "stackgrep", &mut std::io::stdout());
        return ExitCode::Success.into();
    }

    match cmd_search::run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("stackgrep: {:#}", err);
            let code = err
                .downcast_ref::<stackgrep::Error>()
                .map(stackgrep::Error::exit_code)
                .unwrap_or(ExitCode::Failure);
            code.into()
        }
    }
}

/// Log to stderr: warn+ by default, debug+ with --verbose, or whatever
/// STACKGREP_LOG says.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
