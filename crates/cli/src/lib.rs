// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Thread dump search.
//!
//! Parses a thread dump into per-thread records, selects the threads that
//! satisfy a query of `not`/`and`/`or` pattern sets, and renders them with
//! uninteresting stack lines collapsed.

pub mod cli;
pub mod color;
pub mod config;
pub mod diag;
pub mod discovery;
pub mod error;
pub mod file_reader;
pub mod pattern;
pub mod pipeline;
pub mod render;
pub mod select;
pub mod source;
pub mod thread;


pub use config::SearchConfig;
pub use error::{Error, ExitCode, Result};
pub use pattern::PatternSet;
pub use pipeline::{SearchSummary, Searcher};
pub use select::{Query, select};
pub use thread::{ThreadRecord, parse};
