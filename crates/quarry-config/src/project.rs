//! The per-project configuration document binding a build tool to
//! repository endpoints.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Schema version written by this release.
pub const SCHEMA_VERSION: u32 = 1;

/// The closed set of build-tool ecosystems a project can be configured for.
///
/// Serialized as the lowercase tag (`"npm"`, `"maven"`, …), which is also
/// the stem of the per-type configuration file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Npm,
    Maven,
    Gradle,
    Go,
    Nuget,
    Pip,
}

impl ProjectType {
    /// Every supported project type, in a fixed order.
    pub const ALL: [ProjectType; 6] = [
        ProjectType::Npm,
        ProjectType::Maven,
        ProjectType::Gradle,
        ProjectType::Go,
        ProjectType::Nuget,
        ProjectType::Pip,
    ];

    /// The lowercase tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Npm => "npm",
            ProjectType::Maven => "maven",
            ProjectType::Gradle => "gradle",
            ProjectType::Go => "go",
            ProjectType::Nuget => "nuget",
            ProjectType::Pip => "pip",
        }
    }

    /// File name of this type's configuration document, e.g. `"npm.toml"`.
    pub fn config_file(&self) -> String {
        format!("{}.toml", self.as_str())
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where to pull dependencies from or push artifacts to: a remote
/// repository name paired with the server profile it lives on.
///
/// Immutable once constructed; documents are replaced wholesale, never
/// edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryBinding {
    /// Remote repository name (a namespace within the service).
    pub repo: String,
    /// Id of the server profile hosting the repository.
    #[serde(rename = "serverId")]
    pub server_id: String,
}

impl RepositoryBinding {
    pub fn new(repo: &str, server_id: &str) -> Self {
        Self {
            repo: repo.to_owned(),
            server_id: server_id.to_owned(),
        }
    }
}

/// A versioned project configuration document.
///
/// Binds one build-tool ecosystem to a resolver binding (dependency
/// fetching) and a deployer binding (artifact publication). Either
/// binding may be absent: a project may resolve only from the tool's
/// native public source, or run a resolve-only workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub version: u32,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolver: Option<RepositoryBinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployer: Option<RepositoryBinding>,
}

impl ProjectConfig {
    /// Create a document at the current schema version.
    pub fn new(
        project_type: ProjectType,
        resolver: Option<RepositoryBinding>,
        deployer: Option<RepositoryBinding>,
    ) -> Self {
        Self {
            version: SCHEMA_VERSION,
            project_type,
            resolver,
            deployer,
        }
    }

    /// Read and parse a configuration document from the given path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or its content does not
    /// validate.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse and validate document content. `origin` names the source of
    /// the content in error messages.
    ///
    /// Unknown top-level keys are ignored for forward compatibility.
    ///
    /// # Errors
    /// Returns a format error naming the offending field when `version` or
    /// `type` is missing, the `type` tag is not a known project type, the
    /// schema version is unsupported, or a binding carries an empty field.
    pub fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Format {
            path: origin.to_owned(),
            message: e.message().to_owned(),
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    /// Serialize the document as human-readable TOML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|source| ConfigError::Serialize { source })
    }

    fn validate(&self, origin: &str) -> Result<(), ConfigError> {
        if self.version != SCHEMA_VERSION {
            return Err(ConfigError::Format {
                path: origin.to_owned(),
                message: format!(
                    "unsupported version {}, expected {SCHEMA_VERSION}",
                    self.version
                ),
            });
        }
        for (field, binding) in [("resolver", &self.resolver), ("deployer", &self.deployer)] {
            let Some(binding) = binding else {
                continue;
            };
            if binding.repo.is_empty() {
                return Err(ConfigError::Format {
                    path: origin.to_owned(),
                    message: format!("{field}.repo must not be empty"),
                });
            }
            if binding.server_id.is_empty() {
                return Err(ConfigError::Format {
                    path: origin.to_owned(),
                    message: format!("{field}.serverId must not be empty"),
                });
            }
        }
        Ok(())
    }
}
