//! GenerateDocumentHandler - Command handler for branded, versioned documents.
//!
//! Validates the request, resolves branding, picks the next version for the
//! client, encodes the DOCX, persists it and appends a history entry.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::branding::{
    needs_default_logo, resolve, BrandingDefaults, BrandingOverride, BrandingOwner,
    BrandingProfile, HexColor, LogoSource,
};
use crate::domain::document::{
    assemble, content_snippet, next_version, DocumentHistoryEntry, DocumentRequest,
    GeneratedArtifact, SectionSpec,
};
use crate::domain::foundation::{ArtifactId, ClientId, CommandMetadata, UserId, ValidationError};
use crate::ports::{
    ArtifactStore, BrandingRepository, DocumentEncoder, DocumentHistoryRepository, EncodingError,
    LogoAssetSource, StorageError,
};

use super::ClientLocks;

/// Command to generate one document for a client.
///
/// Fields are raw caller input; the handler validates them before touching
/// any storage.
#[derive(Debug, Clone, Default)]
pub struct GenerateDocumentCommand {
    pub client_id: String,
    /// User whose branding applies when the client has none stored.
    pub user_id: Option<String>,
    pub title: String,
    pub sections: Vec<SectionSpec>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    /// Explicit logo override (data URL or bare base64).
    pub logo: Option<String>,
}

impl GenerateDocumentCommand {
    pub fn new(client_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_sections(mut self, sections: Vec<SectionSpec>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_colors(mut self, primary: Option<&str>, secondary: Option<&str>) -> Self {
        self.primary_color = primary.map(String::from);
        self.secondary_color = secondary.map(String::from);
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Validates every caller-supplied field.
    pub fn validate(&self) -> Result<DocumentRequest, ValidationError> {
        let client_id = ClientId::new(self.client_id.clone())?;
        let mut branding = BrandingOverride::from_colors(
            self.primary_color.as_deref(),
            self.secondary_color.as_deref(),
        )?;
        if let Some(logo) = &self.logo {
            branding = branding.with_logo(LogoSource::new(logo.clone())?);
        }

        let mut request = DocumentRequest::new(client_id, self.title.clone(), self.sections.clone())?
            .with_branding(branding);
        if let Some(user_id) = &self.user_id {
            request = request.with_user(UserId::new(user_id.clone())?);
        }
        Ok(request)
    }
}

/// Result of successful document generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateDocumentResult {
    /// Reference resolving to the stored artifact.
    pub download_ref: ArtifactId,
    pub filename: String,
    pub version: u32,
    pub display_title: String,
    pub message: String,
}

/// Error type for document generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateDocumentError {
    /// Caller input was rejected; nothing was read or written.
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// The package could not be built.
    #[error("Document encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    /// A storage read or write failed.
    #[error("Document persistence failed: {0}")]
    Persistence(#[from] StorageError),
}

impl GenerateDocumentError {
    /// Text safe to show the caller. Encoding and storage causes are only
    /// logged.
    pub fn user_message(&self) -> String {
        match self {
            GenerateDocumentError::Validation(err) => err.to_string(),
            GenerateDocumentError::Encoding(_) => "Failed to build document".to_string(),
            GenerateDocumentError::Persistence(_) => "Failed to save document".to_string(),
        }
    }
}

/// Handler for generating branded, versioned documents.
///
/// # Dependencies
///
/// - `BrandingRepository`: stored client/user branding
/// - `LogoAssetSource`: built-in default logo
/// - `DocumentEncoder`: DOCX serialization
/// - `ArtifactStore`: blob persistence
/// - `DocumentHistoryRepository`: per-client version history
///
/// The history read, artifact write and history append run under a
/// per-client lock, so concurrent requests in this process never observe
/// the same current version. Separate processes sharing storage can
/// still race.
pub struct GenerateDocumentHandler {
    branding_repository: Arc<dyn BrandingRepository>,
    logo_assets: Arc<dyn LogoAssetSource>,
    encoder: Arc<dyn DocumentEncoder>,
    artifact_store: Arc<dyn ArtifactStore>,
    history: Arc<dyn DocumentHistoryRepository>,
    default_primary: HexColor,
    default_secondary: HexColor,
    locks: ClientLocks,
}

impl GenerateDocumentHandler {
    pub fn new(
        branding_repository: Arc<dyn BrandingRepository>,
        logo_assets: Arc<dyn LogoAssetSource>,
        encoder: Arc<dyn DocumentEncoder>,
        artifact_store: Arc<dyn ArtifactStore>,
        history: Arc<dyn DocumentHistoryRepository>,
    ) -> Self {
        Self {
            branding_repository,
            logo_assets,
            encoder,
            artifact_store,
            history,
            default_primary: HexColor::default_primary(),
            default_secondary: HexColor::default_secondary(),
            locks: ClientLocks::new(),
        }
    }

    /// Overrides the built-in fallback colours.
    pub fn with_default_colors(mut self, primary: HexColor, secondary: HexColor) -> Self {
        self.default_primary = primary;
        self.default_secondary = secondary;
        self
    }

    pub async fn handle(
        &self,
        cmd: GenerateDocumentCommand,
        metadata: CommandMetadata,
    ) -> Result<GenerateDocumentResult, GenerateDocumentError> {
        // 1. Validate before any storage access
        let request = cmd.validate()?;
        let client_id = request.client_id().clone();

        let _guard = self.locks.acquire(&client_id).await;

        // 2. Resolve branding: override > stored > default
        let stored = self.stored_branding(&request).await?;
        let default_logo = if needs_default_logo(Some(request.branding()), stored.as_ref()) {
            self.logo_assets.load_default_logo().await
        } else {
            None
        };
        let defaults = BrandingDefaults {
            logo: default_logo,
            primary_color: self.default_primary.clone(),
            secondary_color: self.default_secondary.clone(),
        };
        let branding = resolve(Some(request.branding()), stored.as_ref(), &defaults);

        // 3. Pick the next version from the current history
        let existing = self.history.list(&client_id).await?;
        let next = next_version(&existing, request.title());

        // 4. Assemble and encode
        let blocks = assemble(&next.display_title, request.sections());
        let bytes = self.encoder.encode(&blocks, &branding).map_err(|e| {
            tracing::error!(
                client_id = %client_id,
                version = next.version,
                error = %e,
                "Document encoding failed"
            );
            e
        })?;
        let artifact = GeneratedArtifact::docx(bytes, next.filename.clone());

        // 5. Persist, then record; a failed persist never reaches the history
        let stored_artifact = self.artifact_store.persist(&artifact).await.map_err(|e| {
            tracing::error!(client_id = %client_id, error = %e, "Artifact persistence failed");
            e
        })?;

        let mut entry =
            DocumentHistoryEntry::new(&next.display_title, stored_artifact.id, next.version);
        if let Some(snippet) = content_snippet(request.sections()) {
            entry = entry.with_snippet(snippet);
        }
        self.history.append(&client_id, entry).await.map_err(|e| {
            tracing::error!(
                client_id = %client_id,
                artifact_id = %stored_artifact.id,
                error = %e,
                "History append failed; artifact left unreferenced"
            );
            e
        })?;

        tracing::info!(
            client_id = %client_id,
            version = next.version,
            artifact_id = %stored_artifact.id,
            filename = %next.filename,
            logo = ?branding.provenance.logo,
            correlation_id = %metadata.correlation_id(),
            "Generated document"
        );

        Ok(GenerateDocumentResult {
            download_ref: stored_artifact.id,
            message: format!("Generated \"{}\"", next.display_title),
            filename: next.filename,
            version: next.version,
            display_title: next.display_title,
        })
    }

    /// Client profile, or the user's profile when the client has none.
    async fn stored_branding(
        &self,
        request: &DocumentRequest,
    ) -> Result<Option<BrandingProfile>, StorageError> {
        let client_owner = BrandingOwner::Client(request.client_id().clone());
        if let Some(profile) = self.branding_repository.find(&client_owner).await? {
            return Ok(Some(profile));
        }

        match request.user_id() {
            Some(user_id) => {
                self.branding_repository
                    .find(&BrandingOwner::User(user_id.clone()))
                    .await
            }
            None => Ok(None),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
