//! Core types: errors and path resolution.

pub mod errors;
pub mod paths;
