//! Per-client document history records.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ArtifactId, Timestamp};

static VERSION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(v\d+\)\s*$").expect("version suffix pattern is valid"));

/// Category tag of a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    #[default]
    Docx,
}

fn default_version() -> u32 {
    1
}

/// One generated artifact in a client's history. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHistoryEntry {
    /// Versioned display title, e.g. `"Q3 Plan (v2)"`.
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: DocumentKind,

    pub storage_ref: ArtifactId,

    pub created_at: Timestamp,

    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_snippet: Option<String>,
}

impl DocumentHistoryEntry {
    pub fn new(name: impl Into<String>, storage_ref: ArtifactId, version: u32) -> Self {
        Self {
            name: name.into(),
            kind: DocumentKind::Docx,
            storage_ref,
            created_at: Timestamp::now(),
            version,
            content_snippet: None,
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.content_snippet = Some(snippet.into());
        self
    }

    /// The name with one trailing `(vN)` suffix removed.
    pub fn base_title(&self) -> &str {
        match VERSION_SUFFIX.find(&self.name) {
            Some(m) => &self.name[..m.start()],
            None => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_title_strips_version_suffix() {
        let entry = DocumentHistoryEntry::new("Q3 Plan (v12)", ArtifactId::new(), 12);

        assert_eq!(entry.base_title(), "Q3 Plan");
    }

    #[test]
    fn base_title_keeps_names_without_suffix() {
        let entry = DocumentHistoryEntry::new("Imported (draft)", ArtifactId::new(), 1);

        assert_eq!(entry.base_title(), "Imported (draft)");
    }

    #[test]
    fn base_title_strips_only_last_suffix() {
        let entry = DocumentHistoryEntry::new("Plan (v1) (v2)", ArtifactId::new(), 2);

        assert_eq!(entry.base_title(), "Plan (v1)");
    }

    #[test]
    fn serializes_with_record_field_names() {
        let entry = DocumentHistoryEntry::new("Plan (v1)", ArtifactId::new(), 1).with_snippet("Summary");

        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["type"], "docx");
        assert_eq!(value["storageRef"], entry.storage_ref.to_string());
        assert_eq!(value["contentSnippet"], "Summary");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn missing_version_deserializes_as_one() {
        let id = ArtifactId::new();
        let json = format!(
            r#"{{"name":"Old","type":"docx","storageRef":"{}","createdAt":"2024-01-01T00:00:00Z"}}"#,
            id
        );

        let entry: DocumentHistoryEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry.version, 1);
        assert_eq!(entry.content_snippet, None);
    }
}
