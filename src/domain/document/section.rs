//! Generation requests and their sections.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::branding::BrandingOverride;
use crate::domain::foundation::{ClientId, UserId, ValidationError};

/// Heading rank a section title is rendered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingRank {
    Top,
    Second,
    Third,
}

impl HeadingRank {
    /// Maps a caller-supplied level. Only 2 and 3 are special; 1, missing
    /// and any out-of-range value render as a top-rank heading.
    pub fn from_level(level: Option<i64>) -> Self {
        match level {
            Some(2) => HeadingRank::Second,
            Some(3) => HeadingRank::Third,
            _ => HeadingRank::Top,
        }
    }

    /// WordprocessingML style id for this rank.
    pub fn style_id(&self) -> &'static str {
        match self {
            HeadingRank::Top => "Heading1",
            HeadingRank::Second => "Heading2",
            HeadingRank::Third => "Heading3",
        }
    }
}

/// One titled block of caller content.
///
/// `content` may contain newlines; each non-blank line becomes a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default, deserialize_with = "loose_level")]
    pub level: Option<i64>,
}

/// Reads `level` from whatever JSON the caller sent. Whole numbers in
/// integer, float or string form are kept; anything else reads as absent
/// and renders at the top rank.
fn loose_level<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let level = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
        }
        _ => None,
    };
    Ok(level)
}

fn whole_number(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() <= i32::MAX as f64).then(|| f as i64)
}

impl SectionSpec {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            level: None,
        }
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn rank(&self) -> HeadingRank {
        HeadingRank::from_level(self.level)
    }

    /// Non-blank content lines, in order, without surrounding whitespace.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

/// A validated request to generate one document for a client.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRequest {
    client_id: ClientId,
    user_id: Option<UserId>,
    title: String,
    sections: Vec<SectionSpec>,
    branding: BrandingOverride,
}

impl DocumentRequest {
    /// Validates the title and every section title.
    ///
    /// The title is trimmed; it seeds both the display heading and the
    /// stored filename.
    pub fn new(
        client_id: ClientId,
        title: impl Into<String>,
        sections: Vec<SectionSpec>,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        for (index, section) in sections.iter().enumerate() {
            if section.title.trim().is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "sections[{}].title",
                    index
                )));
            }
        }

        Ok(Self {
            client_id,
            user_id: None,
            title,
            sections,
            branding: BrandingOverride::default(),
        })
    }

    /// Names the user whose branding applies when the client has none.
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_branding(mut self, branding: BrandingOverride) -> Self {
        self.branding = branding;
        self
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    pub fn branding(&self) -> &BrandingOverride {
        &self.branding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ClientId {
        ClientId::new("acme").unwrap()
    }

    #[test]
    fn level_mapping_matches_heading_policy() {
        assert_eq!(HeadingRank::from_level(None), HeadingRank::Top);
        assert_eq!(HeadingRank::from_level(Some(1)), HeadingRank::Top);
        assert_eq!(HeadingRank::from_level(Some(2)), HeadingRank::Second);
        assert_eq!(HeadingRank::from_level(Some(3)), HeadingRank::Third);
        assert_eq!(HeadingRank::from_level(Some(4)), HeadingRank::Top);
        assert_eq!(HeadingRank::from_level(Some(0)), HeadingRank::Top);
        assert_eq!(HeadingRank::from_level(Some(-2)), HeadingRank::Top);
    }

    #[test]
    fn paragraphs_skip_blank_lines() {
        let section = SectionSpec::new("Summary", "Line one\n\n   \nLine two\r\n");

        let lines: Vec<_> = section.paragraphs().collect();

        assert_eq!(lines, vec!["Line one", "Line two"]);
    }

    #[test]
    fn empty_content_has_no_paragraphs() {
        assert_eq!(SectionSpec::new("Empty", "").paragraphs().count(), 0);
    }

    #[test]
    fn request_rejects_blank_title() {
        let err = DocumentRequest::new(client(), "   ", vec![]).unwrap_err();

        assert_eq!(err, ValidationError::empty_field("title"));
    }

    #[test]
    fn request_rejects_blank_section_title() {
        let sections = vec![SectionSpec::new("Ok", "x"), SectionSpec::new(" ", "y")];

        let err = DocumentRequest::new(client(), "Plan", sections).unwrap_err();

        assert_eq!(err.field(), "sections[1].title");
    }

    #[test]
    fn request_trims_title_and_allows_no_sections() {
        let request = DocumentRequest::new(client(), "  Acme Q1 ", vec![]).unwrap();

        assert_eq!(request.title(), "Acme Q1");
        assert!(request.sections().is_empty());
        assert!(request.user_id().is_none());
    }

    #[test]
    fn float_and_string_levels_are_coerced() {
        let parse = |raw: &str| serde_json::from_str::<SectionSpec>(raw).unwrap().rank();

        assert_eq!(parse(r#"{"title":"A","level":2.0}"#), HeadingRank::Second);
        assert_eq!(parse(r#"{"title":"A","level":3.0}"#), HeadingRank::Third);
        assert_eq!(parse(r#"{"title":"A","level":"2"}"#), HeadingRank::Second);
        assert_eq!(parse(r#"{"title":"A","level":" 3 "}"#), HeadingRank::Third);
    }

    #[test]
    fn unusable_levels_render_at_top_rank() {
        for raw in [
            r#"{"title":"A","level":null}"#,
            r#"{"title":"A","level":2.5}"#,
            r#"{"title":"A","level":"abc"}"#,
            r#"{"title":"A","level":true}"#,
            r#"{"title":"A","level":[2]}"#,
            r#"{"title":"A","level":1e300}"#,
        ] {
            let section: SectionSpec = serde_json::from_str(raw).unwrap();
            assert_eq!(section.rank(), HeadingRank::Top, "{}", raw);
        }
    }

    #[test]
    fn section_deserializes_without_level_or_content() {
        let section: SectionSpec = serde_json::from_str(r#"{"title":"Intro"}"#).unwrap();

        assert_eq!(section.level, None);
        assert_eq!(section.content, "");
        assert_eq!(section.rank(), HeadingRank::Top);
    }
}
