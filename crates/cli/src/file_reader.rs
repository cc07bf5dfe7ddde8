// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dump file reading with size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification only affects this one search
#![allow(unsafe_code)]
//!
//! - < 64KB: Direct read into buffer
//! - >= 64KB: Memory-mapped I/O
//!
//! Dumps are "UTF-8-ish": invalid sequences are replaced, never rejected.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Error, Result};

/// Files at or above this size are memory-mapped.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Raw dump bytes, either owned or memory-mapped.
pub enum DumpContent {
    /// Small file, stdin, or command output.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(Mmap),
}

impl DumpContent {
    /// Read a dump file using the appropriate strategy for its size.
    pub fn read(path: &Path) -> Result<Self> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let size = fs::metadata(path).map_err(io_err)?.len();

        if size < MMAP_THRESHOLD {
            Ok(DumpContent::Owned(fs::read(path).map_err(io_err)?))
        } else {
            let file = File::open(path).map_err(io_err)?;
            // SAFETY: File handle is valid (just opened), we don't mutate the mapped memory,
            // and stale data on concurrent modification only affects this search.
            let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;
            tracing::debug!("memory-mapped {} ({} bytes)", path.display(), size);
            Ok(DumpContent::Mapped(mmap))
        }
    }

    /// Read everything from a reader (stdin).
    pub fn read_from(mut reader: impl Read) -> Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map_err(|source| Error::Io {
            path: "<stdin>".into(),
            source,
        })?;
        Ok(DumpContent::Owned(buf))
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, DumpContent::Mapped(_))
    }

    fn bytes(&self) -> &[u8] {
        match self {
            DumpContent::Owned(bytes) => bytes,
            DumpContent::Mapped(mmap) => mmap,
        }
    }

    /// Content as text, replacing invalid UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.bytes())
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
