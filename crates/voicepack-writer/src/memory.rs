//! In-memory artifact writer.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use crate::artifact::validate_logical_path;
use crate::error::{Result, WriteError};
use crate::traits::ArtifactWriter;

/// Keeps written documents in a concurrent map.
///
/// Used for dry runs and tests.  Paths registered with
/// [`MemoryArtifactWriter::failing_on`] are rejected.
#[derive(Debug, Default)]
pub struct MemoryArtifactWriter {
    documents: DashMap<PathBuf, Value>,
    failing: HashSet<PathBuf>,
}

impl MemoryArtifactWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes to `path`.
    pub fn failing_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<Value> {
        self.documents.get(path.as_ref()).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Every written path, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.documents.iter().map(|e| e.key().clone()).collect();
        paths.sort();
        paths
    }
}

#[async_trait]
impl ArtifactWriter for MemoryArtifactWriter {
    fn name(&self) -> &str {
        "memory"
    }

    async fn write(&self, path: &Path, document: &Value) -> Result<()> {
        validate_logical_path(path)?;
        if self.failing.contains(path) {
            return Err(WriteError::Rejected {
                path: path.to_path_buf(),
                reason: "configured to fail".into(),
            });
        }
        self.documents.insert(path.to_path_buf(), document.clone());
        Ok(())
    }
}
