// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Thread selection.
//!
//! Each thread is checked against the compiled pattern sets in a fixed
//! order: `not` vetoes, every `and` pattern must be satisfied, and finally
//! at least one `or` pattern must match. Input order is preserved.

use crate::config::SearchConfig;
use crate::error::Result;
use crate::pattern::{CompiledPattern, PatternSet};
use crate::thread::ThreadRecord;

/// The four compiled pattern sets for one invocation.
#[derive(Debug, Clone)]
pub struct Query {
    pub not: PatternSet,
    pub and: PatternSet,
    pub or: PatternSet,
    pub interest: PatternSet,
}

impl Query {
    /// Compile every set with the config's shared case sensitivity.
    ///
    /// All pattern errors surface here, before any thread is looked at.
    pub fn compile(config: &SearchConfig) -> Result<Self> {
        let case = config.case_sensitive;
        Ok(Self {
            not: PatternSet::new("not", &config.not, case)?,
            and: PatternSet::new("and", &config.and, case)?,
            or: PatternSet::new("or", &config.or_patterns(), case)?,
            interest: PatternSet::new("interest", &config.interest_patterns(), case)?,
        })
    }

    /// Returns true if the thread passes `not`, `and`, then `or`.
    ///
    /// Empty records never pass, even for patterns that match `""`.
    pub fn accepts(&self, thread: &ThreadRecord) -> bool {
        !thread.is_empty()
            && !is_excluded(thread, &self.not)
            && satisfies_all(thread, &self.and)
            && matches_any_line(thread, &self.or)
    }
}

/// Select matching threads, preserving input order.
pub fn select<'a>(threads: &'a [ThreadRecord], query: &Query) -> Vec<&'a ThreadRecord> {
    let selected: Vec<&ThreadRecord> = threads.iter().filter(|t| query.accepts(t)).collect();
    tracing::debug!("selected {} of {} threads", selected.len(), threads.len());
    selected
}

/// True if any pattern in `not` matches name, state, or any stack line.
pub fn is_excluded(thread: &ThreadRecord, not: &PatternSet) -> bool {
    !not.is_empty() && matches_any_line(thread, not)
}

/// True if every pattern in `and` matches name, state, or some stack line.
///
/// Each pattern is checked independently against all lines.
pub fn satisfies_all(thread: &ThreadRecord, and: &PatternSet) -> bool {
    and.patterns()
        .iter()
        .all(|pattern| pattern_matches_thread(thread, pattern))
}

/// True if name, state, or any stack line matches any pattern in `set`.
pub fn matches_any_line(thread: &ThreadRecord, set: &PatternSet) -> bool {
    thread.lines().any(|line| set.matches_any(line))
}

fn pattern_matches_thread(thread: &ThreadRecord, pattern: &CompiledPattern) -> bool {
    thread.lines().any(|line| pattern.is_match(line))
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
