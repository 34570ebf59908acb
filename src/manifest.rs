//! The manuscript manifest (`Book.txt`).
//!
//! One manuscript filename per line, relative to the manuscript directory,
//! in book order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Ordered list of manuscript files to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    base: PathBuf,
    entries: Vec<String>,
}

impl Manifest {
    /// Read the manifest at `path`; entries resolve against `base`.
    pub fn open(path: impl AsRef<Path>, base: impl Into<PathBuf>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::parse(base, &text))
    }

    /// Parse manifest text. Line terminators are stripped and blank lines
    /// skipped; nothing else about an entry is interpreted.
    pub fn parse(base: impl Into<PathBuf>, text: &str) -> Self {
        let entries = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        Self {
            base: base.into(),
            entries,
        }
    }

    /// Entries exactly as listed.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entries joined onto the base directory, in manifest order.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.entries.iter().map(|entry| self.base.join(entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
