//! Document Encoder Port - serializes assembled blocks into a package.

use thiserror::Error;

use crate::domain::branding::ResolvedBranding;
use crate::domain::document::BlockSequence;

/// Port for turning assembled blocks plus resolved branding into the
/// bytes of a word-processor package.
///
/// # Contract
///
/// Implementations must:
/// - Emit the logo (when present and decodable) before the title
/// - Colour top-rank headings with the primary colour and second-rank
///   headings with the secondary colour
/// - Treat an undecodable logo as no logo rather than failing
/// - Report package serialization failures as [`EncodingError`]
///
/// Encoding is CPU-bound and does not suspend.
pub trait DocumentEncoder: Send + Sync {
    fn encode(
        &self,
        blocks: &BlockSequence,
        branding: &ResolvedBranding,
    ) -> Result<Vec<u8>, EncodingError>;
}

/// The package could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Container (zip) serialization failed.
    #[error("Package serialization failed: {0}")]
    Package(String),

    /// Writing a part into the in-memory buffer failed.
    #[error("IO error while encoding: {0}")]
    Io(String),
}

impl From<std::io::Error> for EncodingError {
    fn from(err: std::io::Error) -> Self {
        EncodingError::Io(err.to_string())
    }
}
