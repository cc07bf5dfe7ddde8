// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern matching for thread selection and line highlighting.
//!
//! Matching strategy per pattern:
//! - Case-sensitive single literal: memchr::memmem
//! - Case-sensitive multiple literals: aho-corasick
//! - Anything else (including all case-insensitive patterns): regex crate

pub mod matcher;

pub use matcher::{CompiledPattern, PatternSet};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
