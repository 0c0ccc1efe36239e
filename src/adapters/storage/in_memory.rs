//! In-Memory Storage Adapters
//!
//! Artifact, history and branding storage held in process memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::branding::{BrandingOwner, BrandingProfile, BrandingUpdate};
use crate::domain::document::{ArtifactMetadata, DocumentHistoryEntry, GeneratedArtifact};
use crate::domain::foundation::{ArtifactId, ClientId};
use crate::ports::{
    ArtifactStore, BrandingRepository, DocumentHistoryRepository, StorageError, StoredArtifact,
};

/// In-memory artifact storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifactStore {
    artifacts: Arc<RwLock<HashMap<ArtifactId, StoredArtifact>>>,
    max_bytes: Option<u64>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    /// Number of stored artifacts.
    pub async fn len(&self) -> usize {
        self.artifacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.artifacts.read().await.is_empty()
    }
}

#[async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn persist(&self, artifact: &GeneratedArtifact) -> Result<ArtifactMetadata, StorageError> {
        if let Some(max) = self.max_bytes {
            if artifact.size_bytes() > max {
                return Err(StorageError::file_too_large(artifact.size_bytes(), max));
            }
        }

        let id = ArtifactId::new();
        let metadata = ArtifactMetadata::describe(id, artifact);
        self.artifacts.write().await.insert(
            id,
            StoredArtifact {
                metadata: metadata.clone(),
                bytes: artifact.bytes.clone(),
            },
        );
        Ok(metadata)
    }

    async fn retrieve(&self, id: ArtifactId) -> Result<StoredArtifact, StorageError> {
        self.artifacts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| StorageError::not_found(format!("artifact {}", id)))
    }
}

/// In-memory document history.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentHistory {
    entries: Arc<RwLock<HashMap<ClientId, Vec<DocumentHistoryEntry>>>>,
}

impl InMemoryDocumentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a client's history.
    pub async fn seed(&self, client_id: &ClientId, entries: Vec<DocumentHistoryEntry>) {
        self.entries
            .write()
            .await
            .insert(client_id.clone(), entries);
    }
}

#[async_trait]
impl DocumentHistoryRepository for InMemoryDocumentHistory {
    async fn list(&self, client_id: &ClientId) -> Result<Vec<DocumentHistoryEntry>, StorageError> {
        Ok(self
            .entries
            .read()
            .await
            .get(client_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn append(
        &self,
        client_id: &ClientId,
        entry: DocumentHistoryEntry,
    ) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .entry(client_id.clone())
            .or_default()
            .push(entry);
        Ok(())
    }
}

/// In-memory branding profiles.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBrandingRepository {
    profiles: Arc<RwLock<HashMap<BrandingOwner, BrandingProfile>>>,
}

impl InMemoryBrandingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces an owner's profile outright.
    pub async fn insert(&self, owner: BrandingOwner, profile: BrandingProfile) {
        self.profiles.write().await.insert(owner, profile);
    }
}

#[async_trait]
impl BrandingRepository for InMemoryBrandingRepository {
    async fn find(&self, owner: &BrandingOwner) -> Result<Option<BrandingProfile>, StorageError> {
        Ok(self.profiles.read().await.get(owner).cloned())
    }

    async fn merge(
        &self,
        owner: &BrandingOwner,
        update: BrandingUpdate,
    ) -> Result<BrandingProfile, StorageError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.entry(owner.clone()).or_default();
        profile.apply(update);
        Ok(profile.clone())
    }
}
