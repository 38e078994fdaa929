//! Discovery of `*.problem` files.

use crate::domain::PROBLEM_EXTENSION;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Find the problem files directly inside `dir`.
///
/// Matches regular files (or symlinks to them) whose name ends in
/// `.problem`, skipping hidden names the way a shell glob does. The result is
/// sorted by file name so runs over the same directory are reproducible.
///
/// # Errors
///
/// Returns an error if `dir` cannot be read.
pub fn find_problem_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!(path = %path.display(), "Skipping non UTF-8 file name");
            continue;
        };

        if !is_problem_file_name(name) {
            continue;
        }

        if !path.is_file() {
            debug!(path = %path.display(), "Skipping non-file entry");
            continue;
        }

        files.push(path);
    }

    files.sort();
    Ok(files)
}

/// Returns `true` if `name` matches the `*.problem` pattern.
#[must_use]
pub fn is_problem_file_name(name: &str) -> bool {
    if name.starts_with('.') {
        return false;
    }
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == PROBLEM_EXTENSION)
}
