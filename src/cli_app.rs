//! Top-level CLI definition and dispatch.

use std::env;
use std::io;

use clap::Parser;

use target_sweeper::prelude::*;

/// Target Sweeper, a recursive deleter for `target` build directories.
#[derive(Debug, Parser)]
#[command(
    name = "tsw",
    author,
    version,
    about = "Target Sweeper - deletes every `target` directory under the current working directory",
    long_about = None
)]
pub struct Cli {}

/// Sweep the tree rooted at the invoker's working directory.
///
/// Progress goes straight to stdout so every deletion is visible the moment
/// it happens, even when a later step aborts the run.
pub fn run(_args: &Cli) -> Result<SweepSummary> {
    let root = env::current_dir().map_err(|source| TswError::CurrentDir { source })?;
    let sweeper = DirectorySweeper::new(root);
    let stdout = io::stdout();
    let mut reporter = SweepReporter::new(stdout.lock());
    sweeper.run(&mut reporter)
}
