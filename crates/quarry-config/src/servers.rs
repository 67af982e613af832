//! Process-wide registry of server profiles.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

/// The conventional profile id used when a caller does not pick one.
pub const DEFAULT_SERVER_ID: &str = "default";

static GLOBAL: LazyLock<ServerRegistry> = LazyLock::new(ServerRegistry::new);

/// Connection details for one remote repository service instance.
///
/// Credentials are never stored here — `credentials_ref` is an opaque
/// handle into external credential storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerProfile {
    /// Unique profile id, e.g. `"default"`.
    pub id: String,
    /// Base URL of the service instance.
    #[serde(rename = "url")]
    pub base_url: String,
    /// Opaque reference into external credential storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_ref: Option<String>,
}

impl ServerProfile {
    /// Create a profile without a credentials reference.
    pub fn new(id: &str, base_url: &str) -> Self {
        Self {
            id: id.to_owned(),
            base_url: base_url.to_owned(),
            credentials_ref: None,
        }
    }

    /// Builder method to attach a credentials reference.
    pub fn with_credentials_ref(mut self, credentials_ref: &str) -> Self {
        self.credentials_ref = Some(credentials_ref.to_owned());
        self
    }
}

/// The set of known server profiles for the lifetime of a process.
///
/// Reads may happen concurrently from multiple build steps; registration
/// is serialized by the write lock, so a newly registered profile is
/// never partially visible. Persistence of profiles is not this
/// registry's concern.
#[derive(Debug, Default)]
pub struct ServerRegistry {
    profiles: RwLock<HashMap<String, ServerProfile>>,
}

impl ServerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, initialized once on first use and never
    /// implicitly reset.
    pub fn global() -> &'static ServerRegistry {
        &GLOBAL
    }

    /// Register a profile under its id.
    ///
    /// There is no silent overwrite: replacing a profile means
    /// [`ServerRegistry::unregister`] followed by a fresh registration.
    ///
    /// # Errors
    /// Returns [`RegistryError::Duplicate`] if the id is already taken.
    pub fn register(&self, profile: ServerProfile) -> Result<(), RegistryError> {
        let mut profiles = self.write();
        if profiles.contains_key(&profile.id) {
            return Err(RegistryError::Duplicate { id: profile.id });
        }
        profiles.insert(profile.id.clone(), profile);
        Ok(())
    }

    /// Remove and return the profile registered under `id`.
    ///
    /// # Errors
    /// Returns [`RegistryError::Unknown`] if no such profile exists.
    pub fn unregister(&self, id: &str) -> Result<ServerProfile, RegistryError> {
        self.write()
            .remove(id)
            .ok_or_else(|| RegistryError::Unknown { id: id.to_owned() })
    }

    /// Look up the profile registered under `id`.
    ///
    /// # Errors
    /// Returns [`RegistryError::Unknown`] if no such profile exists.
    pub fn lookup(&self, id: &str) -> Result<ServerProfile, RegistryError> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::Unknown { id: id.to_owned() })
    }

    /// Whether a profile is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    /// Drop every registered profile.
    ///
    /// Explicit teardown for test isolation; production code registers
    /// once per process and never resets.
    pub fn clear(&self) {
        self.write().clear();
    }

    // A poisoned lock means another thread panicked mid-access. Every
    // critical section is a single map operation, so the map is still
    // consistent and the poison can be discarded.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ServerProfile>> {
        self.profiles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ServerProfile>> {
        self.profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Errors produced by the server registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A profile with this id is already registered.
    #[error("server profile \"{id}\" is already registered — unregister it first to replace it")]
    Duplicate { id: String },

    /// No profile with this id is registered.
    #[error("unknown server profile \"{id}\"")]
    Unknown { id: String },
}
