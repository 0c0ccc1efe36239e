//! DOCX implementation of the DocumentEncoder port.

use std::io::{Cursor, Write};

use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::domain::branding::{DecodedLogo, ResolvedBranding};
use crate::domain::document::BlockSequence;
use crate::domain::foundation::Timestamp;
use crate::ports::{DocumentEncoder, EncodingError};

use super::parts;

/// Value written to `docProps/app.xml` and `dc:creator`.
pub const DEFAULT_APPLICATION_NAME: &str = "Business Assistant";

/// Builds Office Open XML word-processing packages.
#[derive(Debug, Clone)]
pub struct DocxEncoder {
    application_name: String,
}

impl DocxEncoder {
    pub fn new() -> Self {
        Self {
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
        }
    }

    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = name.into();
        self
    }

    /// Lays out every package part in memory, without zipping.
    pub fn build_package(
        &self,
        blocks: &BlockSequence,
        branding: &ResolvedBranding,
        created: Timestamp,
    ) -> DocxPackage {
        let logo = decode_logo(branding);
        let logo_format = logo.as_ref().map(|l| l.format);

        let mut package = DocxPackage::default();
        package.add(parts::PART_CONTENT_TYPES, parts::content_types(logo_format));
        package.add(parts::PART_ROOT_RELS, parts::root_relationships());
        package.add(parts::PART_DOCUMENT, parts::document(blocks, logo_format));
        package.add(
            parts::PART_DOCUMENT_RELS,
            parts::document_relationships(logo_format),
        );
        package.add(
            parts::PART_STYLES,
            parts::styles(&branding.primary_color, &branding.secondary_color),
        );
        if let Some(logo) = logo {
            package.add(parts::logo_part_name(logo.format), logo.bytes);
        }
        package.add(
            parts::PART_CORE_PROPS,
            parts::core_properties(blocks.title(), &self.application_name, created),
        );
        package.add(
            parts::PART_APP_PROPS,
            parts::app_properties(&self.application_name),
        );
        package
    }
}

impl Default for DocxEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentEncoder for DocxEncoder {
    fn encode(
        &self,
        blocks: &BlockSequence,
        branding: &ResolvedBranding,
    ) -> Result<Vec<u8>, EncodingError> {
        let package = self.build_package(blocks, branding, Timestamp::now());
        let bytes = package.to_bytes()?;

        tracing::debug!(
            parts = package.parts.len(),
            size_bytes = bytes.len(),
            "Encoded DOCX package"
        );
        Ok(bytes)
    }
}

/// Logo decode failures degrade to "no logo".
fn decode_logo(branding: &ResolvedBranding) -> Option<DecodedLogo> {
    let source = branding.logo.as_ref()?;
    match source.decode() {
        Ok(logo) => Some(logo),
        Err(e) => {
            tracing::warn!(
                error = %e,
                logo_source = ?branding.provenance.logo,
                "Logo could not be decoded; encoding without image"
            );
            None
        }
    }
}

/// Package parts in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxPackage {
    parts: Vec<(String, Vec<u8>)>,
}

impl DocxPackage {
    fn add(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.parts.push((name.into(), content.into()));
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(name, _)| name.as_str())
    }

    pub fn part(&self, name: &str) -> Option<&[u8]> {
        self.parts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, content)| content.as_slice())
    }

    /// Zips the parts with Deflate compression.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodingError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        for (name, content) in &self.parts {
            zip.start_file(name.as_str(), options)
                .map_err(|e| EncodingError::Package(format!("{}: {}", name, e)))?;
            zip.write_all(content)?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| EncodingError::Package(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}
