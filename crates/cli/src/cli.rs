//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;
use crate::config::SearchConfig;

/// Search thread dumps for threads matching a composite pattern query
#[derive(Parser)]
#[command(name = "stackgrep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Primary search pattern (regex), matched against name, state and stack
    #[arg(value_name = "PATTERN", required_unless_present = "completions")]
    pub pattern: Option<String>,

    /// Process id to run the dump tool against
    #[arg(value_name = "PID")]
    pub pid: Option<u32>,

    /// Required pattern; every one must match somewhere in the thread
    #[arg(short = 'a', long = "and", value_name = "PAT")]
    pub and: Vec<String>,

    /// Additional optional pattern; any one may match
    #[arg(short = 'o', long = "or", value_name = "PAT")]
    pub or: Vec<String>,

    /// Excluded pattern; a thread matching any of these is skipped
    #[arg(short = 'x', long = "not", value_name = "PAT")]
    pub not: Vec<String>,

    /// Highlight pattern for stack lines (default: all --and/--or patterns)
    #[arg(short = 'i', long = "interest", value_name = "PAT")]
    pub interest: Vec<String>,

    /// Print every stack line instead of collapsing uninteresting ones
    #[arg(short, long)]
    pub full: bool,

    /// Match case-sensitively
    #[arg(short = 's', long)]
    pub case_sensitive: bool,

    /// Read the dump from a file ('-' for stdin)
    #[arg(long, value_name = "PATH", conflicts_with_all = ["pid", "process"])]
    pub file: Option<PathBuf>,

    /// Dump every process whose command line matches NAME
    #[arg(short = 'p', long, value_name = "NAME", conflicts_with = "pid")]
    pub process: Option<String>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "STACKGREP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress the "Found N threads." diagnostic
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Search configuration from command-line values alone.
    ///
    /// Returns None when no pattern was given (completions mode).
    pub fn search_config(&self) -> Option<SearchConfig> {
        let primary = self.pattern.clone()?;
        Some(SearchConfig {
            primary,
            and: self.and.clone(),
            or: self.or.clone(),
            not: self.not.clone(),
            interest: self.interest.clone(),
            full: self.full,
            case_sensitive: self.case_sensitive,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
