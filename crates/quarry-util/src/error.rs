//! Error types for quarry-util.

/// Errors produced by utility functions.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// An I/O operation failed.
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Cannot determine the user's home directory.
    #[error("cannot determine home directory — set QUARRY_HOME or HOME")]
    NoHomeDir,
}
