//! Console reporting: one fixed line per deletion plus a completion line.
//!
//! The sink is injectable so the sweep stays testable; the binary wires it
//! to locked stdout, tests hand in an in-memory buffer. There is no other
//! output surface — no structured log, no JSON.

use std::io::Write;
use std::path::Path;

use crate::core::errors::{Result, TswError};

/// Fixed line printed once after the walk finishes.
pub const COMPLETION_MESSAGE: &str = "All 'target' folders have been deleted.";

/// Writes sweep progress to any [`Write`] sink.
#[derive(Debug)]
pub struct SweepReporter<W: Write> {
    out: W,
}

impl<W: Write> SweepReporter<W> {
    /// Wrap a sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Confirmation line for one deleted subtree, emitted immediately after
    /// the deletion succeeds.
    pub fn deleted(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out, "Deleted '{}'", path.display())
            .map_err(|source| TswError::Report { source })
    }

    /// Completion line, emitted once after the whole tree has been walked.
    pub fn finished(&mut self) -> Result<()> {
        writeln!(self.out, "{COMPLETION_MESSAGE}").map_err(|source| TswError::Report { source })
    }

    /// Consume the reporter and hand back the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
