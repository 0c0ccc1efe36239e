//! Local Filesystem Artifact Store - Implementation of ArtifactStore.
//!
//! Stores each generated document as a blob plus a YAML metadata sidecar.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::document::{ArtifactMetadata, GeneratedArtifact};
use crate::domain::foundation::ArtifactId;
use crate::ports::{ArtifactStore, StorageError, StoredArtifact};

use super::atomic::{read_bytes, read_yaml, write_atomic, write_yaml};

/// Default upper bound on a single artifact (25 MB).
pub const DEFAULT_MAX_ARTIFACT_BYTES: u64 = 25 * 1024 * 1024;

/// Local filesystem storage for generated artifacts.
///
/// # Directory Structure
///
/// ```text
/// {base_path}/artifacts/
/// ├── 3f0c...e1.docx
/// └── 3f0c...e1.meta.yaml
/// ```
///
/// The blob is written (atomically) before its metadata, and `retrieve`
/// goes through the metadata, so a crash between the two writes leaves an
/// orphan blob but never a dangling reference.
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    base_path: PathBuf,
    max_bytes: u64,
}

impl LocalArtifactStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            max_bytes: DEFAULT_MAX_ARTIFACT_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    fn artifacts_dir(&self) -> PathBuf {
        self.base_path.join("artifacts")
    }

    fn blob_path(&self, id: ArtifactId) -> PathBuf {
        self.artifacts_dir().join(format!("{}.docx", id))
    }

    fn metadata_path(&self, id: ArtifactId) -> PathBuf {
        self.artifacts_dir().join(format!("{}.meta.yaml", id))
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn persist(&self, artifact: &GeneratedArtifact) -> Result<ArtifactMetadata, StorageError> {
        let size = artifact.size_bytes();
        if size > self.max_bytes {
            return Err(StorageError::file_too_large(size, self.max_bytes));
        }

        let id = ArtifactId::new();
        let metadata = ArtifactMetadata::describe(id, artifact);

        write_atomic(&self.blob_path(id), &artifact.bytes).await?;
        write_yaml(&self.metadata_path(id), &metadata).await?;

        tracing::debug!(
            artifact_id = %id,
            filename = %metadata.filename,
            size_bytes = size,
            "Persisted artifact"
        );
        Ok(metadata)
    }

    async fn retrieve(&self, id: ArtifactId) -> Result<StoredArtifact, StorageError> {
        let metadata: ArtifactMetadata = read_yaml(&self.metadata_path(id))
            .await?
            .ok_or_else(|| StorageError::not_found(format!("artifact {}", id)))?;
        let bytes = read_bytes(&self.blob_path(id)).await?;

        Ok(StoredArtifact { metadata, bytes })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
