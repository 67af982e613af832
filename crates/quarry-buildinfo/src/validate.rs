//! Build-info validation against an expected module shape.

use crate::model::BuildInfo;

/// Expected shape of a completed build's first module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expected {
    /// Identity the module must carry.
    pub module_id: String,
    /// Number of dependencies the module must list.
    pub dependencies: usize,
    /// Number of artifacts the module must list.
    pub artifacts: usize,
}

impl Expected {
    pub fn new(module_id: &str, dependencies: usize, artifacts: usize) -> Self {
        Self {
            module_id: module_id.to_owned(),
            dependencies,
            artifacts,
        }
    }
}

/// A single way a build-info document failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The document lists no modules at all.
    #[error("build info was not generated correctly — no modules were created")]
    EmptyBuild,

    /// The first module does not carry the expected identity.
    #[error("expected module name \"{expected}\", got \"{actual}\"")]
    ModuleIdMismatch { expected: String, actual: String },

    /// The first module lists the wrong number of dependencies.
    #[error("incorrect number of dependencies in the build info — expected {expected}, found {actual}")]
    DependencyCountMismatch { expected: usize, actual: usize },

    /// The first module lists the wrong number of artifacts.
    #[error("incorrect number of artifacts in the build info — expected {expected}, found {actual}")]
    ArtifactCountMismatch { expected: usize, actual: usize },
}

/// Check a build-info document against the expected shape of its first
/// module.
///
/// Checks run in a fixed order and every failure is reported, since each
/// is diagnostically useful on its own. An empty `modules` list is the
/// one exception: there is no module to inspect, so
/// [`Violation::EmptyBuild`] comes back alone.
///
/// Only the first module is validated. Multi-module builds would need a
/// module selector here; single-module workflows are the producing
/// integrations' shape today.
///
/// Pure: no I/O, no mutation, identical inputs yield identical results.
///
/// # Errors
/// Returns the ordered list of violations when any check fails; any
/// violation fails the whole check.
pub fn validate(info: &BuildInfo, expected: &Expected) -> Result<(), Vec<Violation>> {
    let Some(module) = info.modules.first() else {
        return Err(vec![Violation::EmptyBuild]);
    };

    let mut violations = Vec::new();

    if module.id != expected.module_id {
        violations.push(Violation::ModuleIdMismatch {
            expected: expected.module_id.clone(),
            actual: module.id.clone(),
        });
    }
    if module.dependencies.len() != expected.dependencies {
        violations.push(Violation::DependencyCountMismatch {
            expected: expected.dependencies,
            actual: module.dependencies.len(),
        });
    }
    if module.artifacts.len() != expected.artifacts {
        violations.push(Violation::ArtifactCountMismatch {
            expected: expected.artifacts,
            actual: module.artifacts.len(),
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Artifact, Dependency, Module};

    fn app_build(dependencies: usize, artifacts: usize) -> BuildInfo {
        BuildInfo {
            modules: vec![Module {
                id: "app".to_owned(),
                dependencies: (0..dependencies)
                    .map(|i| Dependency::new(&format!("dep-{i}:1.0.0")))
                    .collect(),
                artifacts: (0..artifacts)
                    .map(|i| Artifact::new(&format!("app-{i}.jar")))
                    .collect(),
            }],
            ..BuildInfo::default()
        }
    }

    #[test]
    fn matching_expectations_are_valid() {
        let info = app_build(3, 2);
        validate(&info, &Expected::new("app", 3, 2)).unwrap();
    }

    #[test]
    fn dependency_count_mismatch_is_the_only_violation() {
        let info = app_build(3, 2);
        let violations = validate(&info, &Expected::new("app", 5, 2)).unwrap_err();
        assert_eq!(
            violations,
            vec![Violation::DependencyCountMismatch {
                expected: 5,
                actual: 3
            }]
        );
    }

    #[test]
    fn empty_build_reported_alone() {
        let info = BuildInfo::default();
        let violations = validate(&info, &Expected::new("app", 3, 2)).unwrap_err();
        assert_eq!(violations, vec![Violation::EmptyBuild]);
    }

    #[test]
    fn all_failures_accumulated_in_order() {
        let info = app_build(1, 0);
        let violations = validate(&info, &Expected::new("other-app", 3, 2)).unwrap_err();
        assert_eq!(
            violations,
            vec![
                Violation::ModuleIdMismatch {
                    expected: "other-app".to_owned(),
                    actual: "app".to_owned()
                },
                Violation::DependencyCountMismatch {
                    expected: 3,
                    actual: 1
                },
                Violation::ArtifactCountMismatch {
                    expected: 2,
                    actual: 0
                },
            ]
        );
    }

    #[test]
    fn only_first_module_is_validated() {
        let mut info = app_build(3, 2);
        info.modules.push(Module {
            id: "ignored".to_owned(),
            dependencies: Vec::new(),
            artifacts: Vec::new(),
        });

        validate(&info, &Expected::new("app", 3, 2)).unwrap();
    }

    #[test]
    fn artifact_mismatch_message_carries_both_counts() {
        let info = app_build(3, 2);
        let violations = validate(&info, &Expected::new("app", 3, 4)).unwrap_err();
        let message = violations.first().unwrap().to_string();
        assert!(message.contains("expected 4"), "message was: {message}");
        assert!(message.contains("found 2"), "message was: {message}");
    }

    #[test]
    fn zero_expectations_match_bare_module() {
        let info = app_build(0, 0);
        validate(&info, &Expected::new("app", 0, 0)).unwrap();
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Expectations derived from the document itself always pass.
            #[test]
            fn matching_document_is_always_valid(
                module_id in "[a-zA-Z][a-zA-Z0-9:._-]{0,30}",
                dependencies in 0usize..8,
                artifacts in 0usize..8,
            ) {
                let mut info = app_build(dependencies, artifacts);
                if let Some(module) = info.modules.first_mut() {
                    module.id = module_id.clone();
                }
                let expected = Expected::new(&module_id, dependencies, artifacts);
                prop_assert!(validate(&info, &expected).is_ok());
            }

            /// The validator reports, never panics, for any expectation.
            #[test]
            fn arbitrary_expectations_never_panic(
                module_id in ".{0,20}",
                dependencies in 0usize..1000,
                artifacts in 0usize..1000,
            ) {
                let info = app_build(2, 1);
                let _ = validate(&info, &Expected::new(&module_id, dependencies, artifacts));
            }
        }
    }
}
