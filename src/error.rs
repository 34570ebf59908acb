//! Error types for manuscript rewriting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a rewrite run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: not valid UTF-8", .path.display())]
    Encoding { path: PathBuf, line: usize },

    #[error(
        "{}:{line}: rule `{rule}` expected capture group {group}, but it did not participate in the match",
        .path.display()
    )]
    MalformedMatch {
        path: PathBuf,
        line: usize,
        rule: &'static str,
        group: usize,
    },

    #[error("invalid pattern for rule `{rule}`: {source}")]
    Pattern {
        rule: &'static str,
        #[source]
        source: regex_lite::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
