//! Template rendering for each module kind
//!
//! Every kind renders to an ordered list of [`Artifact`]s. The order is the
//! order files are written in, which matters when a later file collides.

mod domain;
mod feature;
mod library;
pub mod manifest;

use crate::kind::ModuleKind;
use crate::naming::ModuleName;
use std::path::PathBuf;

pub use manifest::{PackageDependency, PackageManifest};

/// One generated file: a path relative to the scaffold root and its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Render the artifacts for `kind` in generation order
pub fn render(kind: ModuleKind, name: &ModuleName) -> Vec<Artifact> {
    match kind {
        ModuleKind::Feature => feature::artifacts(name),
        ModuleKind::Domain => domain::artifacts(name),
        ModuleKind::Library => library::artifacts(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_counts_per_kind() {
        let name = ModuleName::parse("User").unwrap();
        assert_eq!(render(ModuleKind::Feature, &name).len(), 4);
        assert_eq!(render(ModuleKind::Domain, &name).len(), 2);
        assert_eq!(render(ModuleKind::Library, &name).len(), 2);
    }

    #[test]
    fn test_every_artifact_lives_under_kind_directory() {
        let name = ModuleName::parse("User").unwrap();
        for kind in [ModuleKind::Feature, ModuleKind::Domain, ModuleKind::Library] {
            for artifact in render(kind, &name) {
                assert!(
                    artifact.path.starts_with(format!("{}/User", kind.prefix())),
                    "{} is outside {}/User",
                    artifact.path.display(),
                    kind
                );
            }
        }
    }
}
