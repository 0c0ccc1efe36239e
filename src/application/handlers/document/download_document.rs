//! DownloadDocumentHandler - resolves a download reference to its artifact.

use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::ArtifactId;
use crate::ports::{ArtifactStore, StorageError, StoredArtifact};

/// Query for one stored artifact.
#[derive(Debug, Clone)]
pub struct DownloadDocumentQuery {
    pub download_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadDocumentError {
    /// Reference is malformed or unknown.
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for DownloadDocumentError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { what } => DownloadDocumentError::NotFound(what),
            other => DownloadDocumentError::Storage(other),
        }
    }
}

pub struct DownloadDocumentHandler {
    artifact_store: Arc<dyn ArtifactStore>,
}

impl DownloadDocumentHandler {
    pub fn new(artifact_store: Arc<dyn ArtifactStore>) -> Self {
        Self { artifact_store }
    }

    pub async fn handle(
        &self,
        query: DownloadDocumentQuery,
    ) -> Result<StoredArtifact, DownloadDocumentError> {
        let id = ArtifactId::from_str(query.download_ref.trim())
            .map_err(|_| DownloadDocumentError::NotFound(query.download_ref.clone()))?;

        Ok(self.artifact_store.retrieve(id).await?)
    }
}
