//! Logo payloads.
//!
//! Logos travel and rest as text: either a data URL
//! (`data:image/png;base64,...`) or bare base64. Decoding into raw image
//! bytes happens only when a document is encoded.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Image subtypes a logo may be embedded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Webp,
}

impl LogoFormat {
    /// Maps the `<fmt>` of `data:image/<fmt>;base64,` to a format.
    pub fn from_subtype(subtype: &str) -> Option<Self> {
        match subtype.to_ascii_lowercase().as_str() {
            "png" => Some(LogoFormat::Png),
            "jpeg" | "jpg" | "pjpeg" => Some(LogoFormat::Jpeg),
            "gif" => Some(LogoFormat::Gif),
            "bmp" | "x-ms-bmp" => Some(LogoFormat::Bmp),
            "webp" => Some(LogoFormat::Webp),
            _ => None,
        }
    }

    /// Identifies the format from the payload's magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match image::guess_format(bytes).ok()? {
            image::ImageFormat::Png => Some(LogoFormat::Png),
            image::ImageFormat::Jpeg => Some(LogoFormat::Jpeg),
            image::ImageFormat::Gif => Some(LogoFormat::Gif),
            image::ImageFormat::Bmp => Some(LogoFormat::Bmp),
            image::ImageFormat::WebP => Some(LogoFormat::Webp),
            _ => None,
        }
    }

    /// File extension used for the package part name.
    pub fn extension(&self) -> &'static str {
        match self {
            LogoFormat::Png => "png",
            LogoFormat::Jpeg => "jpeg",
            LogoFormat::Gif => "gif",
            LogoFormat::Bmp => "bmp",
            LogoFormat::Webp => "webp",
        }
    }

    /// MIME type registered for the extension.
    pub fn content_type(&self) -> &'static str {
        match self {
            LogoFormat::Png => "image/png",
            LogoFormat::Jpeg => "image/jpeg",
            LogoFormat::Gif => "image/gif",
            LogoFormat::Bmp => "image/bmp",
            LogoFormat::Webp => "image/webp",
        }
    }
}

/// A logo payload as stored: data URL or bare base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogoSource(String);

impl LogoSource {
    /// Wraps a stored/supplied payload. Blank payloads are rejected.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field("logo"));
        }
        Ok(Self(raw))
    }

    /// Builds a data URL from raw image bytes.
    pub fn from_bytes(bytes: &[u8], format: LogoFormat) -> Self {
        Self(format!(
            "data:{};base64,{}",
            format.content_type(),
            STANDARD.encode(bytes)
        ))
    }

    /// Returns the payload text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the payload into raw image bytes.
    ///
    /// The subtype comes from the data URL prefix when it names a known
    /// image type, otherwise from the bytes themselves, otherwise PNG.
    pub fn decode(&self) -> Result<DecodedLogo, AssetDecodeError> {
        let trimmed = self.0.trim();
        let (declared, payload) = match trimmed.strip_prefix("data:") {
            Some(rest) => {
                let (header, payload) = rest
                    .split_once(',')
                    .ok_or_else(|| AssetDecodeError::UnsupportedDataUrl(truncate(trimmed)))?;
                let mut params = header.split(';');
                let mime = params.next().unwrap_or_default();
                if !params.any(|p| p.eq_ignore_ascii_case("base64")) {
                    return Err(AssetDecodeError::UnsupportedDataUrl(truncate(header)));
                }
                let declared = mime
                    .strip_prefix("image/")
                    .and_then(LogoFormat::from_subtype);
                (declared, payload)
            }
            None => (None, trimmed),
        };

        let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(AssetDecodeError::EmptyPayload);
        }

        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| AssetDecodeError::InvalidBase64(e.to_string()))?;
        if bytes.is_empty() {
            return Err(AssetDecodeError::EmptyPayload);
        }

        let format = declared
            .or_else(|| LogoFormat::sniff(&bytes))
            .unwrap_or(LogoFormat::Png);

        Ok(DecodedLogo { bytes, format })
    }
}

impl TryFrom<String> for LogoSource {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogoSource> for String {
    fn from(logo: LogoSource) -> Self {
        logo.0
    }
}

fn truncate(s: &str) -> String {
    s.chars().take(48).collect()
}

/// Raw image bytes ready for embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLogo {
    pub bytes: Vec<u8>,
    pub format: LogoFormat,
}

/// Logo payload could not be turned into image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetDecodeError {
    #[error("Logo payload is empty")]
    EmptyPayload,

    #[error("Logo payload is not valid base64: {0}")]
    InvalidBase64(String),

    #[error("Unsupported data URL: {0}")]
    UnsupportedDataUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F'];

    #[test]
    fn decode_data_url_uses_declared_subtype() {
        let logo = LogoSource::new(format!("data:image/jpeg;base64,{}", STANDARD.encode(PNG_MAGIC)))
            .unwrap();

        let decoded = logo.decode().unwrap();

        assert_eq!(decoded.format, LogoFormat::Jpeg);
        assert_eq!(decoded.bytes, PNG_MAGIC);
    }

    #[test]
    fn decode_bare_base64_defaults_to_png() {
        let logo = LogoSource::new(STANDARD.encode(b"not an image at all")).unwrap();

        let decoded = logo.decode().unwrap();

        assert_eq!(decoded.format, LogoFormat::Png);
    }

    #[test]
    fn decode_bare_base64_sniffs_known_magic() {
        let logo = LogoSource::new(STANDARD.encode(JPEG_MAGIC)).unwrap();

        assert_eq!(logo.decode().unwrap().format, LogoFormat::Jpeg);
    }

    #[test]
    fn decode_unknown_declared_subtype_falls_back() {
        let logo = LogoSource::new(format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(b"<svg/>")
        ))
        .unwrap();

        assert_eq!(logo.decode().unwrap().format, LogoFormat::Png);
    }

    #[test]
    fn decode_tolerates_line_breaks_in_payload() {
        let encoded = STANDARD.encode(PNG_MAGIC);
        let (a, b) = encoded.split_at(6);
        let logo = LogoSource::new(format!("{}\n{}", a, b)).unwrap();

        assert_eq!(logo.decode().unwrap().bytes, PNG_MAGIC);
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        let logo = LogoSource::new("data:image/png;base64,@@@@").unwrap();

        assert!(matches!(logo.decode(), Err(AssetDecodeError::InvalidBase64(_))));
    }

    #[test]
    fn decode_rejects_non_base64_data_url() {
        let logo = LogoSource::new("data:image/png,rawbytes").unwrap();

        assert!(matches!(
            logo.decode(),
            Err(AssetDecodeError::UnsupportedDataUrl(_))
        ));
    }

    #[test]
    fn decode_rejects_empty_data_url_payload() {
        let logo = LogoSource::new("data:image/png;base64,").unwrap();

        assert_eq!(logo.decode(), Err(AssetDecodeError::EmptyPayload));
    }

    #[test]
    fn from_bytes_produces_decodable_data_url() {
        let logo = LogoSource::from_bytes(PNG_MAGIC, LogoFormat::Png);

        assert!(logo.as_str().starts_with("data:image/png;base64,"));
        let decoded = logo.decode().unwrap();
        assert_eq!(decoded.bytes, PNG_MAGIC);
        assert_eq!(decoded.format, LogoFormat::Png);
    }

    #[test]
    fn new_rejects_blank_payload() {
        assert!(LogoSource::new("  ").is_err());
    }

    #[test]
    fn subtype_aliases_map_to_jpeg() {
        assert_eq!(LogoFormat::from_subtype("JPG"), Some(LogoFormat::Jpeg));
        assert_eq!(LogoFormat::from_subtype("tiff"), None);
    }
}
