//! Artifacts and artifact sets.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, WriteError};

/// A JSON document bound to a logical output path.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub path: PathBuf,
    pub document: Value,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, document: Value) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }
}

/// An ordered collection of artifacts with unique paths.
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
    paths: HashSet<PathBuf>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artifact.  A second artifact for the same path is rejected.
    pub fn push(&mut self, artifact: Artifact) -> Result<()> {
        validate_logical_path(&artifact.path)?;
        if !self.paths.insert(artifact.path.clone()) {
            return Err(WriteError::DuplicatePath {
                path: artifact.path,
            });
        }
        self.artifacts.push(artifact);
        Ok(())
    }

    pub fn extend(&mut self, other: ArtifactSet) -> Result<()> {
        for artifact in other.artifacts {
            self.push(artifact)?;
        }
        Ok(())
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Artifact> {
        let path = path.as_ref();
        self.artifacts.iter().find(|a| a.path == path)
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.paths.contains(path.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|a| a.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn as_slice(&self) -> &[Artifact] {
        &self.artifacts
    }
}

impl IntoIterator for ArtifactSet {
    type Item = Artifact;
    type IntoIter = std::vec::IntoIter<Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.into_iter()
    }
}

/// Check that `path` is relative, non-empty and never leaves its root.
pub(crate) fn validate_logical_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(WriteError::InvalidPath {
            path: path.to_path_buf(),
            reason: "path is empty".into(),
        });
    }

    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(WriteError::InvalidPath {
                    path: path.to_path_buf(),
                    reason: "path escapes the output root".into(),
                });
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(WriteError::InvalidPath {
                    path: path.to_path_buf(),
                    reason: "path must be relative".into(),
                });
            }
        }
    }

    Ok(())
}
