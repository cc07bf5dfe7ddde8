// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use std::io;

use serde::Serialize;
use termcolor::WriteColor;

use super::ThreadFormatter;
use crate::thread::ThreadRecord;

/// JSON formatter. One compact object per invocation, newline-terminated.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    source: &'a str,
    count: usize,
    threads: &'a [&'a ThreadRecord],
}

impl ThreadFormatter for JsonFormatter {
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        source: &str,
        threads: &[&ThreadRecord],
    ) -> io::Result<()> {
        let output = JsonOutput {
            source,
            count: threads.len(),
            threads,
        };
        serde_json::to_writer(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
