//! Root-path resolution for the sweep.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a sweep root to an absolute path.
///
/// Existing paths go through [`fs::canonicalize`] so every reported deletion
/// names a real absolute location. A path that does not exist is made
/// absolute against the working directory and returned as-is; the first
/// `read_dir` on it will surface the failure to the caller.
pub fn absolutize(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    }
}
