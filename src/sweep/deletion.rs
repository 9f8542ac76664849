//! Subtree removal with post-deletion verification.

use std::fs;
use std::path::Path;

use crate::core::errors::{Result, TswError};

/// Remove `path` and everything beneath it, regardless of depth or content.
///
/// Failures propagate to the caller as-is; there is no retry and no
/// skip-and-continue. After removal the path is re-checked so a silently
/// incomplete delete cannot pass unnoticed.
pub fn remove_subtree(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|source| TswError::remove_tree(path, source))?;

    if path.exists() {
        return Err(TswError::NotRemoved {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}
