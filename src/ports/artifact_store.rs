//! Artifact Store Port - durable storage for generated documents.

use async_trait::async_trait;

use crate::domain::document::{ArtifactMetadata, GeneratedArtifact};
use crate::domain::foundation::ArtifactId;

use super::StorageError;

/// Port for persisting encoded artifacts and resolving them later.
///
/// # Contract
///
/// - `persist` returns only once the blob is durably stored; the returned
///   id resolves through `retrieve` from then on
/// - Writes are atomic: a failed `persist` leaves nothing retrievable
/// - `retrieve` of an unknown id is `StorageError::NotFound`
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn persist(&self, artifact: &GeneratedArtifact) -> Result<ArtifactMetadata, StorageError>;

    async fn retrieve(&self, id: ArtifactId) -> Result<StoredArtifact, StorageError>;
}

/// A persisted artifact read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArtifact {
    pub metadata: ArtifactMetadata,
    pub bytes: Vec<u8>,
}

impl StoredArtifact {
    pub fn filename(&self) -> &str {
        &self.metadata.filename
    }

    pub fn content_type(&self) -> &str {
        &self.metadata.content_type
    }
}
