//! Branding Repository Port - stored branding per client or user.

use async_trait::async_trait;

use crate::domain::branding::{BrandingOwner, BrandingProfile, BrandingUpdate};

use super::StorageError;

/// Port for reading and merging branding profiles.
#[async_trait]
pub trait BrandingRepository: Send + Sync {
    /// Stored profile for `owner`, or `None` if nothing was ever stored.
    async fn find(&self, owner: &BrandingOwner) -> Result<Option<BrandingProfile>, StorageError>;

    /// Merges `update` into the owner's profile (creating it if absent)
    /// and returns the result. Unsupplied fields are never cleared.
    async fn merge(
        &self,
        owner: &BrandingOwner,
        update: BrandingUpdate,
    ) -> Result<BrandingProfile, StorageError>;
}
