//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

const MAX_ARTIFACT_LIMIT: u64 = 100 * 1024 * 1024;

/// Which storage adapters back the ports.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Files under `data_dir`.
    #[default]
    Local,
    /// Process memory; lost on restart.
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Root directory for artifacts, history and branding files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Largest document the artifact store accepts
    #[serde(default = "default_max_artifact_bytes")]
    pub max_artifact_bytes: u64,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_artifact_bytes == 0 || self.max_artifact_bytes > MAX_ARTIFACT_LIMIT {
            return Err(ValidationError::InvalidArtifactLimit);
        }
        if self.backend == StorageBackend::Local && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            max_artifact_bytes: default_max_artifact_bytes(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_max_artifact_bytes() -> u64 {
    25 * 1024 * 1024
}
