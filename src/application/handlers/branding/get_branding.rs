//! GetBrandingHandler - read path of the branding storage contract.

use std::sync::Arc;

use crate::domain::branding::{BrandingOwner, BrandingProfile};
use crate::ports::{BrandingRepository, StorageError};

pub struct GetBrandingHandler {
    repository: Arc<dyn BrandingRepository>,
}

impl GetBrandingHandler {
    pub fn new(repository: Arc<dyn BrandingRepository>) -> Self {
        Self { repository }
    }

    /// Stored profile; an owner with nothing stored reads as all-absent.
    pub async fn handle(&self, owner: &BrandingOwner) -> Result<BrandingProfile, StorageError> {
        Ok(self.repository.find(owner).await?.unwrap_or_default())
    }
}
