// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Thread dump parsing.
//!
//! A dump is a sequence of blank-line-delimited blocks. Each block holds a
//! thread name line, a state line, and the stack frames in source order.
//! The first block is the dump preamble and is always dropped.

use serde::Serialize;

/// One thread entry from a dump. All fields are whitespace-trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThreadRecord {
    pub name: String,
    pub state: String,
    pub stack: Vec<String>,
}

impl ThreadRecord {
    /// Build a record from the raw lines of one block.
    fn from_block(lines: &[&str]) -> Self {
        let mut iter = lines.iter().map(|line| line.trim());
        let name = iter.next().unwrap_or_default().to_string();
        let state = iter.next().unwrap_or_default().to_string();
        let stack = iter.map(String::from).collect();
        Self { name, state, stack }
    }

    /// True for the record a run of blank lines leaves behind.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.state.is_empty() && self.stack.is_empty()
    }

    /// All lines a content match may look at: name, state, then the stack.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.state.as_str()]
            .into_iter()
            .chain(self.stack.iter().map(String::as_str))
    }
}

/// Split raw dump text into thread records.
///
/// Total over any input. Every blank line closes the current block, even an
/// empty one, so runs of blank lines yield empty records. A trailing block
/// without a closing blank line is flushed at end of input.
pub fn parse(raw: &str) -> Vec<ThreadRecord> {
    let mut records = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            records.push(ThreadRecord::from_block(&block));
            block.clear();
        } else {
            block.push(line);
        }
    }
    if !block.is_empty() {
        records.push(ThreadRecord::from_block(&block));
    }

    // Preamble
    if !records.is_empty() {
        records.remove(0);
    }

    tracing::debug!("parsed {} thread records", records.len());
    records
}

#[cfg(test)]
#[path = "thread_tests.rs"]
mod tests;
