//! The artifact writer trait and the concurrent fan-out over it.

use std::path::Path;

use async_trait::async_trait;
use futures::future::try_join_all;
use serde_json::Value;

use crate::artifact::Artifact;
use crate::error::Result;

/// Durable storage for assembled documents.
///
/// Implementations must create any missing parent directories and overwrite
/// existing files.  Retrying is the implementation's concern.
#[async_trait]
pub trait ArtifactWriter: Send + Sync {
    /// Short identifier used in log output.
    fn name(&self) -> &str;

    /// Persist `document` at the logical `path`.
    async fn write(&self, path: &Path, document: &Value) -> Result<()>;
}

/// Write every artifact concurrently.
///
/// Resolves with the number of documents written once all writes succeed.
/// The first failure is returned; writes still in flight are dropped.  Each
/// artifact targets a distinct file, so a partial result never leaves a
/// half-merged document behind.
pub async fn write_all<W>(writer: &W, artifacts: &[Artifact]) -> Result<usize>
where
    W: ArtifactWriter + ?Sized,
{
    tracing::debug!(
        writer = writer.name(),
        count = artifacts.len(),
        "writing artifacts"
    );

    let writes = artifacts.iter().map(|artifact| async move {
        writer.write(&artifact.path, &artifact.document).await?;
        tracing::debug!(path = %artifact.path.display(), "artifact written");
        Ok::<_, crate::error::WriteError>(())
    });

    let written = try_join_all(writes).await?.len();

    tracing::info!(writer = writer.name(), count = written, "artifacts written");
    Ok(written)
}
