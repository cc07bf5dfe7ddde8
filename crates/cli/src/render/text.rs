// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::io;

use termcolor::WriteColor;

use super::ThreadFormatter;
use crate::color::scheme;
use crate::pattern::PatternSet;
use crate::thread::ThreadRecord;

/// Indent for stack lines printed without a marker.
pub const INDENT: &str = "    ";

/// Prefix for interesting lines in full mode.
pub const MARKER: &str = "  > ";

/// Stands in for a run of uninteresting lines.
pub const PLACEHOLDER: &str = "...";

/// How a stack line appears in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackLine<'a> {
    /// Interesting line in full mode.
    Marked(&'a str),
    /// Interesting line, or any line in full mode.
    Plain(&'a str),
    /// One or more consecutive uninteresting lines.
    Collapsed,
}

/// Classify each stack line and collapse uninteresting runs.
///
/// With `full`, every line is kept. Otherwise each maximal run of
/// uninteresting lines becomes a single [`StackLine::Collapsed`].
pub fn stack_view<'a>(stack: &'a [String], interest: &PatternSet, full: bool) -> Vec<StackLine<'a>> {
    let mut view = Vec::with_capacity(stack.len());
    let mut in_run = false;

    for line in stack.iter().map(String::as_str) {
        let interesting = interest.matches_any(line);
        match (interesting, full) {
            (true, true) => view.push(StackLine::Marked(line)),
            (true, false) | (false, true) => view.push(StackLine::Plain(line)),
            (false, false) => {
                if !in_run {
                    view.push(StackLine::Collapsed);
                }
                in_run = true;
                continue;
            }
        }
        in_run = false;
    }
    view
}

/// Text formatter.
pub struct TextFormatter<'a> {
    interest: &'a PatternSet,
    full: bool,
}

impl<'a> TextFormatter<'a> {
    pub fn new(interest: &'a PatternSet, full: bool) -> Self {
        Self { interest, full }
    }

    fn write_thread(&self, w: &mut dyn WriteColor, thread: &ThreadRecord) -> io::Result<()> {
        w.set_color(&scheme::name())?;
        write!(w, "{}", thread.name)?;
        w.reset()?;
        writeln!(w)?;

        if !thread.state.is_empty() {
            write!(w, "  state: ")?;
            w.set_color(&scheme::state())?;
            write!(w, "{}", thread.state)?;
            w.reset()?;
            writeln!(w)?;
        }

        for line in stack_view(&thread.stack, self.interest, self.full) {
            match line {
                StackLine::Marked(text) => {
                    w.set_color(&scheme::marked())?;
                    write!(w, "{}{}", MARKER, text)?;
                    w.reset()?;
                    writeln!(w)?;
                }
                StackLine::Plain(text) => writeln!(w, "{}{}", INDENT, text)?,
                StackLine::Collapsed => {
                    write!(w, "{}", INDENT)?;
                    w.set_color(&scheme::placeholder())?;
                    write!(w, "{}", PLACEHOLDER)?;
                    w.reset()?;
                    writeln!(w)?;
                }
            }
        }
        Ok(())
    }
}

impl ThreadFormatter for TextFormatter<'_> {
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        _source: &str,
        threads: &[&ThreadRecord],
    ) -> io::Result<()> {
        for (i, thread) in threads.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            self.write_thread(writer, thread)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
