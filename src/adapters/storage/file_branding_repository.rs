//! File-based Branding Repository Adapter
//!
//! One YAML profile per owner under `{base_path}/branding/`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::branding::{BrandingOwner, BrandingProfile, BrandingUpdate};
use crate::ports::{BrandingRepository, StorageError};

use super::atomic::{read_yaml, write_yaml};

/// File-based branding storage (`{base_path}/branding/{owner_key}.yaml`).
#[derive(Debug, Clone)]
pub struct FileBrandingRepository {
    base_path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileBrandingRepository {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn profile_path(&self, owner: &BrandingOwner) -> PathBuf {
        self.base_path
            .join("branding")
            .join(format!("{}.yaml", owner.storage_key()))
    }
}

#[async_trait]
impl BrandingRepository for FileBrandingRepository {
    async fn find(&self, owner: &BrandingOwner) -> Result<Option<BrandingProfile>, StorageError> {
        read_yaml(&self.profile_path(owner)).await
    }

    async fn merge(
        &self,
        owner: &BrandingOwner,
        update: BrandingUpdate,
    ) -> Result<BrandingProfile, StorageError> {
        let _guard = self.write_lock.lock().await;
        let path = self.profile_path(owner);

        let mut profile: BrandingProfile = read_yaml(&path).await?.unwrap_or_default();
        profile.apply(update);
        write_yaml(&path, &profile).await?;

        tracing::debug!(owner = %owner, "Merged branding profile");
        Ok(profile)
    }
}
