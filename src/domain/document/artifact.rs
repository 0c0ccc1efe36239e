//! Encoded document artifacts.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::foundation::{ArtifactId, Timestamp};

/// MIME type of WordprocessingML packages.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// An encoded document ready to persist or serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub filename: String,
}

impl GeneratedArtifact {
    /// A DOCX artifact.
    pub fn docx(bytes: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: DOCX_CONTENT_TYPE.to_string(),
            filename: filename.into(),
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Hex-encoded SHA-256 of the payload.
    pub fn checksum(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.bytes);
        hex::encode(hasher.finalize())
    }
}

/// Metadata recorded next to a persisted artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub id: ArtifactId,
    pub filename: String,
    pub content_type: String,
    pub size_bytes: u64,
    pub checksum: String,
    pub created_at: Timestamp,
}

impl ArtifactMetadata {
    pub fn describe(id: ArtifactId, artifact: &GeneratedArtifact) -> Self {
        Self {
            id,
            filename: artifact.filename.clone(),
            content_type: artifact.content_type.clone(),
            size_bytes: artifact.size_bytes(),
            checksum: artifact.checksum(),
            created_at: Timestamp::now(),
        }
    }
}
