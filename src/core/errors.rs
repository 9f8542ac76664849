//! TSW-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the crate.
pub type Result<T> = std::result::Result<T, TswError>;

/// Top-level error type for Target Sweeper.
///
/// Every variant is fatal: nothing is caught or retried below `main`. The
/// sweep aborts on the first failure, leaving only the confirmation lines
/// already printed as its progress record.
#[derive(Debug, Error)]
pub enum TswError {
    #[error("[TSW-1001] cannot resolve the working directory: {source}")]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },

    #[error("[TSW-2001] cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[TSW-2002] failed to delete {path}: {source}")]
    RemoveTree {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[TSW-2003] {path} still exists after deletion")]
    NotRemoved { path: PathBuf },

    #[error("[TSW-3001] cannot write report line: {source}")]
    Report {
        #[source]
        source: std::io::Error,
    },
}

impl TswError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CurrentDir { .. } => "TSW-1001",
            Self::ReadDir { .. } => "TSW-2001",
            Self::RemoveTree { .. } => "TSW-2002",
            Self::NotRemoved { .. } => "TSW-2003",
            Self::Report { .. } => "TSW-3001",
        }
    }

    /// Convenience constructor for traversal read failures.
    #[must_use]
    pub fn read_dir(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convenience constructor for subtree removal failures.
    #[must_use]
    pub fn remove_tree(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::RemoveTree {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
