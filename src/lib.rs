#![forbid(unsafe_code)]

//! Target Sweeper (tsw) — recursive deleter for `target` build directories.
//!
//! Run it at the root of a workspace and it walks the whole tree, removes
//! every directory named exactly `target`, prints one confirmation line per
//! deletion, and closes with a fixed completion line. One sequential pass,
//! no flags and no configuration. Any filesystem failure aborts the run.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use target_sweeper::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use target_sweeper::sweep::report::SweepReporter;
//! use target_sweeper::sweep::walker::DirectorySweeper;
//! ```

pub mod prelude;

pub mod core;
pub mod sweep;
