//! Plans and writes a module's artifacts under a root directory

use crate::error::Result;
use crate::kind::ModuleKind;
use crate::naming::ModuleName;
use crate::templates::{self, Artifact};
use crate::writer::write_new_file;
use std::path::PathBuf;

/// Scaffolder - creates module skeletons under a packages root
#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
}

impl Scaffolder {
    /// Create a scaffolder writing under `root` (e.g. `Packages`)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Artifacts for a module, with paths resolved against the root, in write order
    pub fn plan(&self, kind: ModuleKind, name: &ModuleName) -> Vec<Artifact> {
        templates::render(kind, name)
            .into_iter()
            .map(|artifact| Artifact {
                path: self.root.join(artifact.path),
                content: artifact.content,
            })
            .collect()
    }

    /// Write every artifact of a module, returning the paths written.
    ///
    /// Stops at the first failure. Files written before it stay on disk.
    pub fn create(&self, kind: ModuleKind, name: &ModuleName) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();

        for artifact in self.plan(kind, name) {
            write_new_file(&artifact.path, &artifact.content)?;
            created.push(artifact.path);
        }

        Ok(created)
    }
}
