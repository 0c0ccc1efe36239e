//! Filesystem source for the bundled default logo.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::branding::{LogoFormat, LogoSource};
use crate::ports::LogoAssetSource;

/// Reads the default logo from a path relative to the working directory
/// on every resolution, so replacing the file needs no restart.
#[derive(Debug, Clone)]
pub struct FilesystemLogoAsset {
    path: PathBuf,
}

impl FilesystemLogoAsset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LogoAssetSource for FilesystemLogoAsset {
    async fn load_default_logo(&self) -> Option<LogoSource> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Default logo asset unavailable; continuing without logo"
                );
                return None;
            }
        };

        if bytes.is_empty() {
            tracing::warn!(path = %self.path.display(), "Default logo asset is empty");
            return None;
        }

        let format = LogoFormat::sniff(&bytes)
            .or_else(|| {
                self.path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(LogoFormat::from_subtype)
            })
            .unwrap_or(LogoFormat::Png);

        Some(LogoSource::from_bytes(&bytes, format))
    }
}

/// Logo source that never has a logo.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefaultLogo;

#[async_trait]
impl LogoAssetSource for NoDefaultLogo {
    async fn load_default_logo(&self) -> Option<LogoSource> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[tokio::test]
    async fn missing_asset_yields_none() {
        let temp = TempDir::new().unwrap();
        let source = FilesystemLogoAsset::new(temp.path().join("assets/default-logo.png"));

        assert!(source.load_default_logo().await.is_none());
    }

    #[tokio::test]
    async fn empty_asset_yields_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logo.png");
        std::fs::write(&path, b"").unwrap();

        assert!(FilesystemLogoAsset::new(path).load_default_logo().await.is_none());
    }

    #[tokio::test]
    async fn readable_asset_becomes_data_url() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logo.bin");
        std::fs::write(&path, PNG_MAGIC).unwrap();

        let logo = FilesystemLogoAsset::new(path).load_default_logo().await.unwrap();

        assert!(logo.as_str().starts_with("data:image/png;base64,"));
        assert_eq!(logo.decode().unwrap().bytes, PNG_MAGIC);
    }

    #[tokio::test]
    async fn unknown_magic_falls_back_to_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logo.gif");
        std::fs::write(&path, b"not really a gif").unwrap();

        let logo = FilesystemLogoAsset::new(path).load_default_logo().await.unwrap();

        assert!(logo.as_str().starts_with("data:image/gif;base64,"));
    }

    #[tokio::test]
    async fn no_default_logo_is_always_none() {
        assert!(NoDefaultLogo.load_default_logo().await.is_none());
    }
}
