//! The consumed build-info document shape.
//!
//! Build-tool integrations produce this document after a build; Quarry
//! only consumes it for validation and publication, never generates it.

use serde::{Deserialize, Serialize};

/// Structured metadata describing one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuildInfo {
    /// Build name, as published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Build number, as published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Timestamp the build started at, in the producer's format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
    /// Modules produced by the build, in build order. Non-empty for a
    /// successful build.
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl BuildInfo {
    /// Parse a build-info document from JSON.
    ///
    /// Unknown fields are ignored; producers attach tool-specific extras.
    ///
    /// # Errors
    /// Returns an error if the content is not valid JSON of this shape.
    pub fn from_json(content: &str) -> Result<Self, BuildInfoError> {
        serde_json::from_str(content).map_err(|source| BuildInfoError::Parse { source })
    }
}

/// One module of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Module identity, e.g. `"org.example:app:1.0.0"`.
    pub id: String,
    /// Dependencies the module was built against.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    /// Artifacts the module produced.
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

/// A dependency record inside a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub id: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub dependency_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    /// Scopes the dependency was used in (e.g. `"compile"`, `"test"`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

impl Dependency {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            dependency_type: None,
            sha1: None,
            md5: None,
            scopes: Vec::new(),
        }
    }
}

/// An artifact record inside a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
}

impl Artifact {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            artifact_type: None,
            sha1: None,
            md5: None,
        }
    }
}

/// Errors produced when ingesting a build-info document.
#[derive(Debug, thiserror::Error)]
pub enum BuildInfoError {
    /// The document is not valid build-info JSON.
    #[error("cannot parse build-info document: {source}")]
    Parse { source: serde_json::Error },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_document() {
        let info = BuildInfo::from_json(r#"{"modules": []}"#).unwrap();
        assert!(info.modules.is_empty());
        assert!(info.name.is_none());
    }

    #[test]
    fn parse_full_document() {
        let content = r#"
        {
            "name": "npm-build",
            "number": "42",
            "started": "2026-08-07T10:00:00.000Z",
            "modules": [
                {
                    "id": "npm-app:1.0.0",
                    "dependencies": [
                        {"id": "lodash:4.17.21", "type": "tgz", "sha1": "abc", "scopes": ["prod"]}
                    ],
                    "artifacts": [
                        {"name": "npm-app-1.0.0.tgz", "type": "tgz", "sha1": "def", "md5": "ghi"}
                    ]
                }
            ]
        }"#;
        let info = BuildInfo::from_json(content).unwrap();
        assert_eq!(info.name.as_deref(), Some("npm-build"));
        assert_eq!(info.number.as_deref(), Some("42"));

        let module = info.modules.first().unwrap();
        assert_eq!(module.id, "npm-app:1.0.0");
        assert_eq!(module.dependencies.len(), 1);
        assert_eq!(module.artifacts.len(), 1);

        let dep = module.dependencies.first().unwrap();
        assert_eq!(dep.scopes, vec!["prod".to_owned()]);
        let artifact = module.artifacts.first().unwrap();
        assert_eq!(artifact.md5.as_deref(), Some("ghi"));
    }

    #[test]
    fn module_lists_default_to_empty() {
        let info = BuildInfo::from_json(r#"{"modules": [{"id": "app"}]}"#).unwrap();
        let module = info.modules.first().unwrap();
        assert!(module.dependencies.is_empty());
        assert!(module.artifacts.is_empty());
    }

    #[test]
    fn unknown_fields_ignored() {
        let content = r#"{"modules": [], "agent": {"name": "quarry", "version": "1.0.0"}}"#;
        let info = BuildInfo::from_json(content).unwrap();
        assert!(info.modules.is_empty());
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let result = BuildInfo::from_json("{not json");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("cannot parse build-info"), "error was: {err}");
    }

    #[test]
    fn module_without_id_rejected() {
        let result = BuildInfo::from_json(r#"{"modules": [{"dependencies": []}]}"#);
        assert!(result.is_err());
    }
}
