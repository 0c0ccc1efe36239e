//! UpdateBrandingHandler - write path of the branding storage contract.

use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::branding::{BrandingOwner, BrandingProfile, BrandingUpdate};
use crate::domain::foundation::{CommandMetadata, ValidationError};
use crate::ports::{BrandingRepository, StorageError};

/// Partial update; `None` fields are left as stored.
#[derive(Debug, Clone)]
pub struct UpdateBrandingCommand {
    pub owner: BrandingOwner,
    pub logo: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub extensions: BTreeMap<String, Value>,
}

impl UpdateBrandingCommand {
    pub fn new(owner: BrandingOwner) -> Self {
        Self {
            owner,
            logo: None,
            primary_color: None,
            secondary_color: None,
            extensions: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateBrandingError {
    #[error("Invalid branding: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub struct UpdateBrandingHandler {
    repository: Arc<dyn BrandingRepository>,
}

impl UpdateBrandingHandler {
    pub fn new(repository: Arc<dyn BrandingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateBrandingCommand,
        metadata: CommandMetadata,
    ) -> Result<BrandingProfile, UpdateBrandingError> {
        let update = BrandingUpdate::parse(
            cmd.logo,
            cmd.primary_color,
            cmd.secondary_color,
            cmd.extensions,
        )?;

        let profile = self.repository.merge(&cmd.owner, update).await?;

        tracing::info!(
            owner = %cmd.owner,
            correlation_id = %metadata.correlation_id(),
            "Branding profile updated"
        );
        Ok(profile)
    }
}
