//! Document domain - sections, block assembly, versioning and history.

mod artifact;
mod blocks;
mod history;
mod section;
mod snippet;
mod versioning;

pub use artifact::{ArtifactMetadata, GeneratedArtifact, DOCX_CONTENT_TYPE};
pub use blocks::{assemble, Block, BlockSequence};
pub use history::{DocumentHistoryEntry, DocumentKind};
pub use section::{DocumentRequest, HeadingRank, SectionSpec};
pub use snippet::{content_snippet, MAX_SNIPPET_CHARS};
pub use versioning::{next_version, sanitize_filename_component, NextVersion, DOCX_EXTENSION};
