//! Default logo asset port.

use async_trait::async_trait;

use crate::domain::branding::LogoSource;

/// Source of the built-in default logo.
///
/// Never fails: an unreadable asset is reported as `None` so generation
/// proceeds without an image.
#[async_trait]
pub trait LogoAssetSource: Send + Sync {
    async fn load_default_logo(&self) -> Option<LogoSource>;
}
