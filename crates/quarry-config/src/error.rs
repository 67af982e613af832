//! Error types for quarry-config.

/// Errors produced by configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The working directory handed to the resolver does not exist.
    #[error("invalid path {path}: not an existing directory")]
    InvalidPath { path: String },

    /// A filesystem operation failed.
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A configuration document is malformed.
    #[error("invalid project config at {path}: {message}")]
    Format { path: String, message: String },

    /// A configuration document could not be serialized.
    #[error("cannot serialize project config: {source}")]
    Serialize { source: toml::ser::Error },

    /// A server profile operation failed.
    #[error("{0}")]
    Registry(#[from] crate::servers::RegistryError),

    /// A utility operation failed.
    #[error("{0}")]
    Util(#[from] quarry_util::error::UtilError),
}
