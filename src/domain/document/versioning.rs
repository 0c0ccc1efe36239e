//! Version numbering and filename derivation for regenerated documents.

use super::DocumentHistoryEntry;

/// File extension of generated documents.
pub const DOCX_EXTENSION: &str = "docx";

/// Outcome of [`next_version`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextVersion {
    pub version: u32,
    /// `"{title} (v{version})"`.
    pub display_title: String,
    pub filename: String,
}

/// Computes the next version for `requested_title` against a history
/// snapshot.
///
/// Matching is a plain prefix check of each entry name against the
/// requested title, so `"Plan"` also matches `"Plan B (v1)"`.
pub fn next_version(history: &[DocumentHistoryEntry], requested_title: &str) -> NextVersion {
    let version = history
        .iter()
        .filter(|entry| entry.name.starts_with(requested_title))
        .map(|entry| entry.version.max(1))
        .max()
        .map_or(1, |current| current.saturating_add(1));

    let display_title = format!("{} (v{})", requested_title, version);
    let filename = format!(
        "{}.{}",
        sanitize_filename_component(&display_title),
        DOCX_EXTENSION
    );

    NextVersion {
        version,
        display_title,
        filename,
    }
}

/// Replaces every character outside `[a-zA-Z0-9]` with `_`, then
/// lower-cases. Idempotent.
pub fn sanitize_filename_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
