// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One search over one dump: parse, select, render.
//!
//! A [`Searcher`] holds only compiled, immutable state, so the same value
//! runs once per dump when a process name resolves to several pids.

use std::io;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::render;
use crate::select::{self, Query};
use crate::thread;

/// Counts from one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    /// Thread records parsed (preamble excluded).
    pub parsed: usize,
    /// Threads selected and written.
    pub matched: usize,
}

/// Compiled search, reusable across dumps.
#[derive(Debug, Clone)]
pub struct Searcher {
    query: Query,
    format: OutputFormat,
    full: bool,
}

impl Searcher {
    /// Compile all pattern sets. Fails before any dump is read.
    pub fn new(config: &SearchConfig, format: OutputFormat) -> Result<Self> {
        Ok(Self {
            query: Query::compile(config)?,
            format,
            full: config.full,
        })
    }

    /// Search one dump and write the selected threads to `out`.
    pub fn search(
        &self,
        raw: &str,
        label: &str,
        out: &mut dyn WriteColor,
    ) -> io::Result<SearchSummary> {
        let threads = thread::parse(raw);
        let selected = select::select(&threads, &self.query);

        render::formatter(self.format, &self.query.interest, self.full)
            .format_to(out, label, &selected)?;
        out.flush()?;

        Ok(SearchSummary {
            parsed: threads.len(),
            matched: selected.len(),
        })
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
