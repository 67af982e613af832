//! Build-info document model and validation for Quarry.

pub mod model;
pub mod validate;

pub use model::{Artifact, BuildInfo, BuildInfoError, Dependency, Module};
pub use validate::{validate, Expected, Violation};
