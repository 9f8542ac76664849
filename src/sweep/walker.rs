//! Sequential tree walker that deletes matching build directories in place.
//!
//! The walker is the whole tool: one depth-first pass over the root, an
//! exact name check per child directory, and an immediate recursive delete
//! on every match. Deleted subtrees are pruned from the walk, so a `target`
//! nested inside another `target` is covered by the outer deletion and is
//! never visited or reported on its own.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, TswError};
use crate::core::paths::absolutize;
use crate::sweep::deletion::remove_subtree;
use crate::sweep::report::SweepReporter;

/// Directory name that marks a subtree for deletion. Exact, case-sensitive,
/// no wildcard or pattern support.
pub const TARGET_DIR_NAME: &str = "target";

/// Outcome of one sweep pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Absolute paths of the deleted directories, in deletion order. Matches
    /// nested under another match are covered by the outermost deletion and
    /// do not appear.
    pub deleted: Vec<PathBuf>,
}

impl SweepSummary {
    /// Number of subtrees removed by this pass.
    #[must_use]
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    /// `true` when the pass found nothing to delete.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.deleted.is_empty()
    }
}

/// Tree walker + deleter.
///
/// Behavior invariants:
/// - One sequential pass, no depth limit
/// - Only real directories are matched; files and symlinks are ignored
/// - The root itself is never a deletion candidate, whatever its name
/// - A matched directory is deleted, reported once, and pruned from the walk
/// - The first filesystem failure aborts the pass
#[derive(Debug, Clone)]
pub struct DirectorySweeper {
    root: PathBuf,
}

impl DirectorySweeper {
    /// Create a sweeper rooted at `root`. Relative roots are resolved
    /// against the working directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: absolutize(root.as_ref()),
        }
    }

    /// The resolved absolute root of the sweep.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and delete every directory named [`TARGET_DIR_NAME`].
    ///
    /// One confirmation line per deleted subtree goes to `reporter` as the
    /// deletions happen, followed by the completion line once the walk is
    /// done. Traversal order across the tree is unspecified. On error the
    /// pass aborts immediately: lines already written are the only progress
    /// record, and no completion line is emitted.
    pub fn run<W: Write>(&self, reporter: &mut SweepReporter<W>) -> Result<SweepSummary> {
        let mut summary = SweepSummary::default();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir).map_err(|e| TswError::read_dir(&dir, e))?;

            for entry in entries {
                let entry = entry.map_err(|e| TswError::read_dir(&dir, e))?;
                let file_type = entry
                    .file_type()
                    .map_err(|e| TswError::read_dir(entry.path(), e))?;

                // Only real directories participate: files never match, and
                // symlinks are neither matched nor followed.
                if !file_type.is_dir() {
                    continue;
                }

                let path = entry.path();
                if entry.file_name() == TARGET_DIR_NAME {
                    remove_subtree(&path)?;
                    reporter.deleted(&path)?;
                    summary.deleted.push(path);
                } else {
                    pending.push(path);
                }
            }
        }

        reporter.finished()?;
        Ok(summary)
    }
}
