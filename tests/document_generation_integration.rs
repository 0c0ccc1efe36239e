//! Integration tests for document generation.
//!
//! These tests drive the generate handler over the file-backed adapters and
//! inspect the produced DOCX packages:
//! 1. Block layout and versioned naming
//! 2. Version sequence across repeated requests
//! 3. Validation happens before any storage access
//! 4. Default logo fallback and its absence
//! 5. User branding fallback and malformed stored colours
//! 6. The full HTTP stack over local storage

use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use business_assistant::adapters::assets::FilesystemLogoAsset;
use business_assistant::adapters::docx::DocxEncoder;
use business_assistant::adapters::storage::{
    FileBrandingRepository, FileDocumentHistory, InMemoryArtifactStore, LocalArtifactStore,
};
use business_assistant::application::handlers::branding::{
    UpdateBrandingCommand, UpdateBrandingHandler,
};
use business_assistant::application::handlers::document::{
    GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
};
use business_assistant::config::{AppConfig, StorageConfig};
use business_assistant::domain::branding::{BrandingOwner, BrandingProfile, BrandingUpdate};
use business_assistant::domain::document::{DocumentHistoryEntry, SectionSpec};
use business_assistant::domain::foundation::{
    ArtifactId, ClientId, CommandMetadata, UserId,
};
use business_assistant::ports::{
    ArtifactStore, BrandingRepository, DocumentHistoryRepository, StorageError,
};
use business_assistant::setup::{build_router, AppServices};

// =============================================================================
// Test Infrastructure
// =============================================================================

const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
    0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
    0xCF, 0xC0, 0x00, 0x00, 0x03, 0x01, 0x01, 0x00, 0x18, 0xDD, 0x8D, 0xB0, 0x00, 0x00, 0x00,
    0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

struct Fixture {
    dir: TempDir,
    artifacts: Arc<LocalArtifactStore>,
    history: Arc<FileDocumentHistory>,
    branding: Arc<FileBrandingRepository>,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        Self {
            artifacts: Arc::new(LocalArtifactStore::new(dir.path())),
            history: Arc::new(FileDocumentHistory::new(dir.path())),
            branding: Arc::new(FileBrandingRepository::new(dir.path())),
            dir,
        }
    }

    fn logo_path(&self) -> std::path::PathBuf {
        self.dir.path().join("default-logo.png")
    }

    fn install_default_logo(&self) {
        std::fs::write(self.logo_path(), PNG_1X1).unwrap();
    }

    fn handler(&self) -> GenerateDocumentHandler {
        GenerateDocumentHandler::new(
            self.branding.clone(),
            Arc::new(FilesystemLogoAsset::new(self.logo_path())),
            Arc::new(DocxEncoder::new()),
            self.artifacts.clone(),
            self.history.clone(),
        )
    }

    async fn download(&self, id: ArtifactId) -> Vec<u8> {
        self.artifacts.retrieve(id).await.unwrap().bytes
    }
}

fn read_part(docx: &[u8], name: &str) -> Option<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(docx)).unwrap();
    let mut file = archive.by_name(name).ok()?;
    let mut out = String::new();
    file.read_to_string(&mut out).unwrap();
    Some(out)
}

fn media_parts(docx: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(docx)).unwrap();
    archive
        .file_names()
        .filter(|n| n.starts_with("word/media/"))
        .map(String::from)
        .collect()
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn client() -> ClientId {
    ClientId::new("acme").unwrap()
}

// =============================================================================
// Layout and Naming
// =============================================================================

#[tokio::test]
async fn first_document_is_version_one_with_one_heading_and_two_paragraphs() {
    let fx = Fixture::new();
    let cmd = GenerateDocumentCommand::new("acme", "Acme Q1").with_sections(vec![
        SectionSpec::new("Summary", "Line one\n\nLine two").with_level(1),
    ]);

    let result = fx.handler().handle(cmd, CommandMetadata::new()).await.unwrap();

    assert_eq!(result.version, 1);
    assert_eq!(result.display_title, "Acme Q1 (v1)");
    assert_eq!(result.filename, "acme_q1__v1_.docx");

    let docx = fx.download(result.download_ref).await;
    let document = read_part(&docx, "word/document.xml").unwrap();
    assert_eq!(count(&document, r#"<w:pStyle w:val="Title"/>"#), 1);
    assert_eq!(count(&document, r#"<w:pStyle w:val="Heading1"/>"#), 1);
    assert_eq!(count(&document, r#"<w:spacing w:after="200"/>"#), 2);
    assert!(document.contains("Acme Q1 (v1)"));
    assert!(document.contains("Line one"));
    assert!(document.contains("Line two"));
}

#[tokio::test]
async fn empty_sections_still_produce_a_titled_package() {
    let fx = Fixture::new();
    fx.install_default_logo();

    let result = fx
        .handler()
        .handle(GenerateDocumentCommand::new("acme", "Plan"), CommandMetadata::new())
        .await
        .unwrap();

    let docx = fx.download(result.download_ref).await;
    let document = read_part(&docx, "word/document.xml").unwrap();
    assert_eq!(count(&document, r#"<w:pStyle w:val="Title"/>"#), 1);
    assert_eq!(count(&document, "<w:drawing>"), 1);
    assert_eq!(media_parts(&docx), vec!["word/media/logo.png".to_string()]);
    assert!(read_part(&docx, "docProps/core.xml")
        .unwrap()
        .contains("<dc:title>Plan (v1)</dc:title>"));
}

#[tokio::test]
async fn stored_branding_colors_reach_the_styles_part() {
    let fx = Fixture::new();
    fx.branding
        .merge(
            &BrandingOwner::Client(client()),
            BrandingUpdate::parse(
                None,
                Some("#112233".to_string()),
                Some("#445566".to_string()),
                Default::default(),
            )
            .unwrap(),
        )
        .await
        .unwrap();

    let result = fx
        .handler()
        .handle(GenerateDocumentCommand::new("acme", "Plan"), CommandMetadata::new())
        .await
        .unwrap();

    let styles = read_part(&fx.download(result.download_ref).await, "word/styles.xml").unwrap();
    assert!(styles.contains(r#"<w:color w:val="112233"/>"#));
    assert!(styles.contains(r#"<w:color w:val="445566"/>"#));
}

#[tokio::test]
async fn malformed_stored_colour_falls_back_to_default() {
    let fx = Fixture::new();
    std::fs::create_dir_all(fx.dir.path().join("branding")).unwrap();
    std::fs::write(
        fx.dir.path().join("branding/client_acme.yaml"),
        "primaryColor: '#ZZZZZZ'\nsecondaryColor: '#00FF00'\n",
    )
    .unwrap();

    let result = fx
        .handler()
        .handle(GenerateDocumentCommand::new("acme", "Plan"), CommandMetadata::new())
        .await
        .unwrap();

    assert_eq!(result.version, 1);
    let styles = read_part(&fx.download(result.download_ref).await, "word/styles.xml").unwrap();
    assert!(styles.contains(r#"<w:color w:val="1E40AF"/>"#));
    assert!(styles.contains(r#"<w:color w:val="00FF00"/>"#));
}

// =============================================================================
// Versioning
// =============================================================================

#[tokio::test]
async fn repeated_requests_yield_increasing_versions() {
    let fx = Fixture::new();
    let handler = fx.handler();

    let mut versions = Vec::new();
    for _ in 0..3 {
        let result = handler
            .handle(GenerateDocumentCommand::new("acme", "Plan"), CommandMetadata::new())
            .await
            .unwrap();
        versions.push(result.version);
    }

    assert_eq!(versions, vec![1, 2, 3]);
    let names: Vec<_> = fx
        .history
        .list(&client())
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["Plan (v1)", "Plan (v2)", "Plan (v3)"]);
}

#[tokio::test]
async fn existing_history_entry_bumps_next_version() {
    let fx = Fixture::new();
    fx.history
        .append(
            &client(),
            DocumentHistoryEntry::new("Acme Q1 (v1)", ArtifactId::new(), 1),
        )
        .await
        .unwrap();

    let result = fx
        .handler()
        .handle(GenerateDocumentCommand::new("acme", "Acme Q1"), CommandMetadata::new())
        .await
        .unwrap();

    assert_eq!(result.version, 2);
    assert_eq!(result.filename, "acme_q1__v2_.docx");
}

#[tokio::test]
async fn concurrent_requests_for_one_client_get_distinct_versions() {
    let fx = Fixture::new();
    let handler = Arc::new(fx.handler());

    let tasks: Vec<_> = (0..5)
        .map(|_| {
            let handler = handler.clone();
            tokio::spawn(async move {
                handler
                    .handle(GenerateDocumentCommand::new("acme", "Plan"), CommandMetadata::new())
                    .await
                    .unwrap()
                    .version
            })
        })
        .collect();

    let mut versions = Vec::new();
    for task in tasks {
        versions.push(task.await.unwrap());
    }
    versions.sort_unstable();

    assert_eq!(versions, vec![1, 2, 3, 4, 5]);
}

// =============================================================================
// Validation Before Storage
// =============================================================================

#[derive(Default)]
struct CountingStorage {
    calls: AtomicUsize,
}

#[async_trait]
impl BrandingRepository for CountingStorage {
    async fn find(&self, _owner: &BrandingOwner) -> Result<Option<BrandingProfile>, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }

    async fn merge(
        &self,
        _owner: &BrandingOwner,
        _update: BrandingUpdate,
    ) -> Result<BrandingProfile, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(BrandingProfile::default())
    }
}

#[async_trait]
impl DocumentHistoryRepository for CountingStorage {
    async fn list(&self, _client_id: &ClientId) -> Result<Vec<DocumentHistoryEntry>, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn append(
        &self,
        _client_id: &ClientId,
        _entry: DocumentHistoryEntry,
    ) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn invalid_color_is_rejected_before_any_storage_access() {
    let storage = Arc::new(CountingStorage::default());
    let artifacts = Arc::new(InMemoryArtifactStore::new());
    let handler = GenerateDocumentHandler::new(
        storage.clone(),
        Arc::new(FilesystemLogoAsset::new("does/not/exist.png")),
        Arc::new(DocxEncoder::new()),
        artifacts.clone(),
        storage.clone(),
    );

    let result = handler
        .handle(
            GenerateDocumentCommand::new("acme", "Plan").with_colors(Some("#ZZZZZZ"), None),
            CommandMetadata::new(),
        )
        .await;

    assert!(matches!(result, Err(GenerateDocumentError::Validation(_))));
    assert_eq!(storage.calls.load(Ordering::SeqCst), 0);
    assert!(artifacts.is_empty().await);
}

// =============================================================================
// Logo Fallback
// =============================================================================

#[tokio::test]
async fn unreadable_default_logo_yields_no_image_and_success() {
    let fx = Fixture::new();

    let result = fx
        .handler()
        .handle(
            GenerateDocumentCommand::new("acme", "Plan")
                .with_sections(vec![SectionSpec::new("Summary", "Text")]),
            CommandMetadata::new(),
        )
        .await
        .unwrap();

    let docx = fx.download(result.download_ref).await;
    assert!(media_parts(&docx).is_empty());
    assert_eq!(
        count(&read_part(&docx, "word/document.xml").unwrap(), "<w:drawing>"),
        0
    );
}

#[tokio::test]
async fn user_branding_applies_when_client_has_none() {
    let fx = Fixture::new();
    let update = UpdateBrandingHandler::new(fx.branding.clone());
    let mut cmd = UpdateBrandingCommand::new(BrandingOwner::User(UserId::new("owner-1").unwrap()));
    cmd.primary_color = Some("#010203".to_string());
    update.handle(cmd, CommandMetadata::new()).await.unwrap();

    let result = fx
        .handler()
        .handle(
            GenerateDocumentCommand::new("acme", "Plan").with_user("owner-1"),
            CommandMetadata::new(),
        )
        .await
        .unwrap();

    let styles = read_part(&fx.download(result.download_ref).await, "word/styles.xml").unwrap();
    assert!(styles.contains(r#"<w:color w:val="010203"/>"#));
}

// =============================================================================
// HTTP Stack
// =============================================================================

fn local_config(data_dir: &Path) -> AppConfig {
    let mut config = AppConfig {
        storage: StorageConfig {
            data_dir: data_dir.to_path_buf(),
            ..Default::default()
        },
        ..Default::default()
    };
    config.branding.default_logo_path = data_dir.join("missing-logo.png");
    config
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn http_generate_then_download_over_local_storage() {
    let dir = TempDir::new().unwrap();
    let config = local_config(dir.path());
    let app = build_router(AppServices::from_config(&config).unwrap(), &config);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/documents/generate")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    json!({
                        "clientId": "acme",
                        "title": "Acme Q1",
                        "sections": [{"title": "Summary", "content": "Line one\n\nLine two", "level": 1}]
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["filename"], json!("acme_q1__v1_.docx"));

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!(
                    "/api/documents/{}",
                    body["downloadRef"].as_str().unwrap()
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let document = read_part(&bytes, "word/document.xml").unwrap();
    assert!(document.contains("Acme Q1 (v1)"));

    assert!(dir.path().join("clients/acme/history.yaml").exists());
}
