// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled patterns and pattern sets.

use aho_corasick::AhoCorasick;
use memchr::memmem;
use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};

use crate::error::{Error, Result};

/// Returns true if the pattern has no regex metacharacters.
fn is_literal(pattern: &str) -> bool {
    regex::escape(pattern) == pattern
}

/// A single compiled pattern.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    /// Case-sensitive literal substring.
    Literal(memmem::Finder<'static>),
    /// Regular expression.
    Regex(Regex),
}

impl CompiledPattern {
    /// Compile a pattern. Literals only take the fast path when matching
    /// is case-sensitive.
    pub fn compile(pattern: &str, case_sensitive: bool) -> Result<Self> {
        if case_sensitive && is_literal(pattern) {
            return Ok(CompiledPattern::Literal(
                memmem::Finder::new(pattern.as_bytes()).into_owned(),
            ));
        }
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source: Box::new(source),
            })?;
        Ok(CompiledPattern::Regex(regex))
    }

    /// Returns true if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            CompiledPattern::Literal(finder) => finder.find(text.as_bytes()).is_some(),
            CompiledPattern::Regex(regex) => regex.is_match(text),
        }
    }
}

/// Disjunction over all patterns of a set, for `matches_any`.
#[derive(Debug, Clone)]
enum AnyMatcher {
    Empty,
    Single(CompiledPattern),
    Literals(AhoCorasick),
    Regexes(RegexSet),
}

/// A group of patterns combined by logical OR.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
    any: AnyMatcher,
}

impl PatternSet {
    /// Compile every pattern in `sources`. `name` labels the set in logs.
    ///
    /// Fails on the first invalid pattern.
    pub fn new(name: &'static str, sources: &[String], case_sensitive: bool) -> Result<Self> {
        let patterns = sources
            .iter()
            .map(|p| CompiledPattern::compile(p, case_sensitive))
            .collect::<Result<Vec<_>>>()?;

        let any = match patterns.as_slice() {
            [] => AnyMatcher::Empty,
            [single] => AnyMatcher::Single(single.clone()),
            _ if case_sensitive && sources.iter().all(|p| is_literal(p)) => {
                match AhoCorasick::new(sources) {
                    Ok(ac) => AnyMatcher::Literals(ac),
                    Err(e) => {
                        tracing::warn!("aho-corasick build failed for {}: {}", name, e);
                        regex_set(sources, case_sensitive)?
                    }
                }
            }
            _ => regex_set(sources, case_sensitive)?,
        };

        tracing::debug!("compiled {} pattern set: {:?}", name, sources);
        Ok(Self { patterns, any })
    }

    /// Compiled patterns, in the order given.
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns true if `text` matches at least one pattern in the set.
    pub fn matches_any(&self, text: &str) -> bool {
        match &self.any {
            AnyMatcher::Empty => false,
            AnyMatcher::Single(pattern) => pattern.is_match(text),
            AnyMatcher::Literals(ac) => ac.is_match(text),
            AnyMatcher::Regexes(set) => set.is_match(text),
        }
    }
}

fn regex_set(sources: &[String], case_sensitive: bool) -> Result<AnyMatcher> {
    // Each pattern compiled on its own, so a failure here is a size limit.
    RegexSetBuilder::new(sources)
        .case_insensitive(!case_sensitive)
        .build()
        .map(AnyMatcher::Regexes)
        .map_err(|source| Error::InvalidPattern {
            pattern: sources.join("|"),
            source: Box::new(source),
        })
}
