//! Storage Adapters
//!
//! Implementations of the artifact, history and branding ports.
//!
//! ## Available Adapters
//!
//! - **LocalArtifactStore** - Generated documents as blobs + YAML sidecars on disk
//! - **FileDocumentHistory** - Per-client history as YAML files on disk
//! - **FileBrandingRepository** - Branding profiles as YAML files on disk
//! - **InMemory*** - Same contracts held in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{LocalArtifactStore, InMemoryArtifactStore};
//!
//! // Production: file-based storage
//! let artifacts = LocalArtifactStore::new("./data").with_max_bytes(10 * 1024 * 1024);
//!
//! // Testing: in-memory storage
//! let artifacts = InMemoryArtifactStore::new();
//! ```

mod atomic;
mod file_branding_repository;
mod file_history_repository;
mod in_memory;
mod local_artifact_store;

pub use file_branding_repository::FileBrandingRepository;
pub use file_history_repository::FileDocumentHistory;
pub use in_memory::{InMemoryArtifactStore, InMemoryBrandingRepository, InMemoryDocumentHistory};
pub use local_artifact_store::{LocalArtifactStore, DEFAULT_MAX_ARTIFACT_BYTES};
