//! Scope-ordered configuration lookup and the configuration writer.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::project::{ProjectConfig, ProjectType};
use crate::servers::ServerRegistry;

/// Name of the hidden project-local configuration directory.
const PROJECT_DIR: &str = ".quarry";
/// Subdirectory holding the per-type configuration documents.
const PROJECTS_SUBDIR: &str = "projects";

/// The precedence tier a configuration document is stored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// Hidden subdirectory of the project working directory.
    Project,
    /// Subdirectory of the Quarry home directory.
    Global,
}

/// Scopes in lookup order: the first scope with a document wins.
pub const SCOPE_PRECEDENCE: [ConfigScope; 2] = [ConfigScope::Project, ConfigScope::Global];

impl ConfigScope {
    /// Directory holding configuration documents for this scope.
    ///
    /// `base` is the project working directory for
    /// [`ConfigScope::Project`] and the Quarry home for
    /// [`ConfigScope::Global`].
    pub fn projects_dir(&self, base: &Path) -> PathBuf {
        match self {
            ConfigScope::Project => base.join(PROJECT_DIR).join(PROJECTS_SUBDIR),
            ConfigScope::Global => base.join(PROJECTS_SUBDIR),
        }
    }
}

/// Path of the configuration document for a scope, base directory, and
/// project type.
pub fn config_path(scope: ConfigScope, base: &Path, project_type: ProjectType) -> PathBuf {
    scope.projects_dir(base).join(project_type.config_file())
}

/// Find the configuration document applicable to `workdir` for
/// `project_type`.
///
/// Scopes are polled in [`SCOPE_PRECEDENCE`] order and the first existing
/// document wins; there is no merging across scopes. `Ok(None)` means no
/// document exists at any scope — the caller falls back to the build
/// tool's own defaults. Resolution never creates configuration.
///
/// Every server id referenced by the document's bindings must be
/// registered in `servers`.
///
/// # Errors
/// Returns an error if `workdir` is not an existing directory, a document
/// exists but is malformed or unreadable, or a binding references an
/// unknown server profile.
pub fn resolve(
    workdir: &Path,
    project_type: ProjectType,
    home: &Path,
    servers: &ServerRegistry,
) -> Result<Option<ProjectConfig>, ConfigError> {
    if !workdir.is_dir() {
        return Err(ConfigError::InvalidPath {
            path: workdir.display().to_string(),
        });
    }

    for scope in SCOPE_PRECEDENCE {
        let base = match scope {
            ConfigScope::Project => workdir,
            ConfigScope::Global => home,
        };
        let path = config_path(scope, base, project_type);
        if !path.is_file() {
            continue;
        }

        let config = ProjectConfig::from_path(&path)?;
        for binding in [&config.resolver, &config.deployer].into_iter().flatten() {
            servers.lookup(&binding.server_id)?;
        }
        return Ok(Some(config));
    }

    Ok(None)
}

/// Like [`resolve`], with the home directory taken from the environment
/// (`QUARRY_HOME` override, `~/.quarry` default).
///
/// # Errors
/// As [`resolve`], and additionally if no home directory can be
/// determined.
pub fn resolve_default(
    workdir: &Path,
    project_type: ProjectType,
    servers: &ServerRegistry,
) -> Result<Option<ProjectConfig>, ConfigError> {
    let home = quarry_util::fs::quarry_home()?;
    resolve(workdir, project_type, &home, servers)
}

/// Write `config` into each target directory at the given scope.
///
/// For [`ConfigScope::Project`] the targets are project working
/// directories; for [`ConfigScope::Global`] the target is the Quarry
/// home. Intermediate directories are created as needed and any prior
/// document at a destination is truncated. Between racing writers the
/// last write wins; callers that need atomic replacement write to a
/// temporary path and rename it into place themselves.
///
/// Returns the written paths, one per target directory. A subsequent
/// [`resolve`] for the same directory and type returns the just-written
/// document.
///
/// # Errors
/// Returns an error if the document cannot be serialized or a destination
/// cannot be created or written.
pub fn write_config(
    dirs: &[PathBuf],
    config: &ProjectConfig,
    scope: ConfigScope,
) -> Result<Vec<PathBuf>, ConfigError> {
    let content = config.to_toml()?;
    let mut written = Vec::with_capacity(dirs.len());

    for dir in dirs {
        let dest_dir = scope.projects_dir(dir);
        quarry_util::fs::ensure_dir(&dest_dir)?;

        let dest = dest_dir.join(config.project_type.config_file());
        std::fs::write(&dest, &content).map_err(|source| ConfigError::Io {
            path: dest.display().to_string(),
            source,
        })?;
        written.push(dest);
    }

    Ok(written)
}
