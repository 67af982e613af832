//! Filesystem utilities for Quarry.

use std::path::{Path, PathBuf};

use crate::error::UtilError;

/// Environment variable overriding the Quarry home directory.
pub const HOME_ENV: &str = "QUARRY_HOME";

/// Create a directory and all parent directories if they do not exist.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<(), UtilError> {
    std::fs::create_dir_all(path).map_err(|source| UtilError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Return the Quarry home directory.
///
/// `QUARRY_HOME` takes precedence when set; otherwise the home resolves
/// to `~/.quarry` via `HOME` (Unix) or `USERPROFILE` (Windows).
///
/// # Errors
/// Returns an error if no environment variable yields a home directory.
pub fn quarry_home() -> Result<PathBuf, UtilError> {
    if let Ok(overridden) = std::env::var(HOME_ENV) {
        if !overridden.is_empty() {
            return Ok(PathBuf::from(overridden));
        }
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .map_err(|_| UtilError::NoHomeDir)?;
    Ok(home.join(".quarry"))
}
