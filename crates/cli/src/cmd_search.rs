// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search command implementation.

use anyhow::Context;
use termcolor::StandardStream;

use stackgrep::cli::Cli;
use stackgrep::color;
use stackgrep::config::{self, DumpConfig};
use stackgrep::diag::Diagnostics;
use stackgrep::discovery;
use stackgrep::error::ExitCode;
use stackgrep::pipeline::Searcher;
use stackgrep::source::DumpSource;

/// Run a search over every dump the command line names.
///
/// Dumps are searched one after another; the first dump that cannot be
/// acquired aborts the run.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    // Find and load config
    let config_path = cli.config.clone().or_else(|| discovery::find_config(&cwd));
    let file_config = match &config_path {
        Some(path) => Some(config::load(path)?),
        None => None,
    };

    let mut search = cli
        .search_config()
        .ok_or_else(|| anyhow::anyhow!("missing PATTERN"))?;
    let dump = match file_config {
        Some(file) => {
            search = search.merge_file(&file.search);
            file.dump
        }
        None => DumpConfig::default(),
    };

    // Compile every pattern before touching any dump
    let searcher = Searcher::new(&search, cli.format)?;

    let source = DumpSource::select(cli.file.clone(), cli.process.clone(), cli.pid);
    let targets = source.resolve(&dump)?;

    let stdout = StandardStream::stdout(color::stdout_color(cli.color, cli.no_color));
    let mut out = stdout.lock();
    let diag = Diagnostics::new(cli.quiet);

    for target in &targets {
        let label = target.to_string();
        if targets.len() > 1 {
            diag.section(&label);
        }
        let content = target.read(&dump)?;
        let summary = searcher
            .search(&content.text(), &label, &mut out)
            .with_context(|| format!("failed to write results for {}", label))?;
        tracing::debug!("{}: {} of {} threads matched", label, summary.matched, summary.parsed);
        diag.found(summary.matched);
    }

    Ok(ExitCode::Success)
}
