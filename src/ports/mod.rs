//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Document Ports
//!
//! - `DocumentEncoder` - Serializes assembled blocks into a DOCX package
//! - `ArtifactStore` - Persists encoded documents and resolves download refs
//! - `DocumentHistoryRepository` - Per-client version history
//!
//! ## Branding Ports
//!
//! - `BrandingRepository` - Stored client/user branding profiles
//! - `LogoAssetSource` - Built-in default logo

mod artifact_store;
mod branding_repository;
mod document_encoder;
mod document_history_repository;
mod logo_asset_source;
mod storage_error;

pub use artifact_store::{ArtifactStore, StoredArtifact};
pub use branding_repository::BrandingRepository;
pub use document_encoder::{DocumentEncoder, EncodingError};
pub use document_history_repository::DocumentHistoryRepository;
pub use logo_asset_source::LogoAssetSource;
pub use storage_error::StorageError;
