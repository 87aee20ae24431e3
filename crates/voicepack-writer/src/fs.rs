//! Filesystem artifact writer.
//!
//! Logical paths are resolved under a root directory and must not escape it.
//! Documents are written as two-space indented JSON.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::artifact::validate_logical_path;
use crate::error::{Result, WriteError};
use crate::traits::ArtifactWriter;

/// Writes artifacts below `root_dir` using `tokio::fs`.
#[derive(Debug, Clone)]
pub struct FsArtifactWriter {
    root_dir: PathBuf,
}

impl FsArtifactWriter {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// The on-disk location of a logical path.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf> {
        validate_logical_path(path)?;
        Ok(self.root_dir.join(path))
    }
}

#[async_trait]
impl ArtifactWriter for FsArtifactWriter {
    fn name(&self) -> &str {
        "filesystem"
    }

    async fn write(&self, path: &Path, document: &Value) -> Result<()> {
        let full_path = self.resolve(path)?;

        let mut bytes = serde_json::to_vec_pretty(document).map_err(|e| WriteError::Serialize {
            path: path.to_path_buf(),
            source: e,
        })?;
        bytes.push(b'\n');

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| WriteError::Io {
                    path: full_path.clone(),
                    source: e,
                })?;
        }

        tokio::fs::write(&full_path, bytes)
            .await
            .map_err(|e| WriteError::Io {
                path: full_path.clone(),
                source: e,
            })?;

        tracing::trace!(path = %full_path.display(), "document persisted");
        Ok(())
    }
}
