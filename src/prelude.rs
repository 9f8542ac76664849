//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use target_sweeper::prelude::*;
//! ```

// Core
pub use crate::core::errors::{Result, TswError};
pub use crate::core::paths::absolutize;

// Sweep
pub use crate::sweep::report::{COMPLETION_MESSAGE, SweepReporter};
pub use crate::sweep::walker::{DirectorySweeper, SweepSummary, TARGET_DIR_NAME};
