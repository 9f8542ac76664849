//! Sweep engine: directory walker, subtree deletion, progress reporting.

pub mod deletion;
pub mod report;
pub mod walker;
