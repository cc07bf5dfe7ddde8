// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for selected threads.
//!
//! Text output prints each thread with its stack filtered through the
//! interest set; JSON output prints the selected records as-is.

mod json;
mod text;

use std::io;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::pattern::PatternSet;
use crate::thread::ThreadRecord;

pub use json::JsonFormatter;
pub use text::{StackLine, TextFormatter, stack_view};

/// Formats the threads selected by one invocation.
pub trait ThreadFormatter {
    /// Write all selected threads. `source` labels where the dump came from.
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        source: &str,
        threads: &[&ThreadRecord],
    ) -> io::Result<()>;
}

/// Build the formatter for an output format.
pub fn formatter<'a>(
    format: OutputFormat,
    interest: &'a PatternSet,
    full: bool,
) -> Box<dyn ThreadFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(interest, full)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Render threads as uncolored text.
pub fn render(
    threads: &[&ThreadRecord],
    interest: &PatternSet,
    full: bool,
) -> io::Result<String> {
    let mut out = termcolor::NoColor::new(Vec::new());
    TextFormatter::new(interest, full).format_to(&mut out, "", threads)?;
    Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
