//! Adapter selection and handler state.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::adapters::assets::FilesystemLogoAsset;
use crate::adapters::docx::DocxEncoder;
use crate::adapters::http::{app_router, BrandingAppState, DocumentsAppState};
use crate::adapters::storage::{
    FileBrandingRepository, FileDocumentHistory, InMemoryArtifactStore,
    InMemoryBrandingRepository, InMemoryDocumentHistory, LocalArtifactStore,
};
use crate::application::handlers::document::GenerateDocumentHandler;
use crate::config::{AppConfig, ServerConfig, StorageBackend};
use crate::ports::{
    ArtifactStore, BrandingRepository, DocumentEncoder, DocumentHistoryRepository,
    LogoAssetSource,
};

/// Port implementations selected by configuration.
#[derive(Clone)]
pub struct AppServices {
    pub artifact_store: Arc<dyn ArtifactStore>,
    pub history: Arc<dyn DocumentHistoryRepository>,
    pub branding_repository: Arc<dyn BrandingRepository>,
    pub logo_assets: Arc<dyn LogoAssetSource>,
    pub encoder: Arc<dyn DocumentEncoder>,
    pub generate: Arc<GenerateDocumentHandler>,
}

impl AppServices {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let storage = &config.storage;
        let (artifact_store, history, branding_repository): (
            Arc<dyn ArtifactStore>,
            Arc<dyn DocumentHistoryRepository>,
            Arc<dyn BrandingRepository>,
        ) = match storage.backend {
            StorageBackend::Local => (
                Arc::new(
                    LocalArtifactStore::new(&storage.data_dir)
                        .with_max_bytes(storage.max_artifact_bytes),
                ),
                Arc::new(FileDocumentHistory::new(&storage.data_dir)),
                Arc::new(FileBrandingRepository::new(&storage.data_dir)),
            ),
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; documents are lost on restart");
                (
                    Arc::new(
                        InMemoryArtifactStore::new().with_max_bytes(storage.max_artifact_bytes),
                    ),
                    Arc::new(InMemoryDocumentHistory::new()),
                    Arc::new(InMemoryBrandingRepository::new()),
                )
            }
        };

        let logo_assets: Arc<dyn LogoAssetSource> = Arc::new(FilesystemLogoAsset::new(
            &config.branding.default_logo_path,
        ));
        let encoder: Arc<dyn DocumentEncoder> = Arc::new(
            DocxEncoder::new().with_application_name(config.branding.application_name.clone()),
        );

        let generate = GenerateDocumentHandler::new(
            branding_repository.clone(),
            logo_assets.clone(),
            encoder.clone(),
            artifact_store.clone(),
            history.clone(),
        )
        .with_default_colors(
            config.branding.primary_color()?,
            config.branding.secondary_color()?,
        );

        Ok(Self {
            artifact_store,
            history,
            branding_repository,
            logo_assets,
            encoder,
            generate: Arc::new(generate),
        })
    }
}

/// Builds the application router over the given services.
pub fn build_router(services: AppServices, config: &AppConfig) -> Router {
    let documents = DocumentsAppState {
        generate: services.generate.clone(),
        artifact_store: services.artifact_store.clone(),
        history: services.history.clone(),
    };
    let branding = BrandingAppState {
        branding_repository: services.branding_repository.clone(),
    };

    app_router(
        documents,
        branding,
        Duration::from_secs(config.server.request_timeout_secs),
        cors_layer(&config.server),
    )
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
