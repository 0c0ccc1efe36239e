//! Short indexable text stored with each history entry.

use super::SectionSpec;

/// Upper bound on snippet length, in characters.
pub const MAX_SNIPPET_CHARS: usize = 280;

/// Section titles and non-blank content lines, whitespace collapsed and
/// cut at [`MAX_SNIPPET_CHARS`]. `None` when there is nothing to index.
pub fn content_snippet(sections: &[SectionSpec]) -> Option<String> {
    let joined = sections
        .iter()
        .flat_map(|s| std::iter::once(s.title.as_str()).chain(s.paragraphs()))
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() {
        return None;
    }

    Some(joined.chars().take(MAX_SNIPPET_CHARS).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_across_sections() {
        let sections = vec![
            SectionSpec::new("Summary", "Line  one\n\n\tLine two"),
            SectionSpec::new("Team", ""),
        ];

        assert_eq!(
            content_snippet(&sections).as_deref(),
            Some("Summary Line one Line two Team")
        );
    }

    #[test]
    fn no_sections_yield_none() {
        assert_eq!(content_snippet(&[]), None);
    }

    #[test]
    fn long_content_is_capped() {
        let sections = vec![SectionSpec::new("S", "é".repeat(1000))];

        let snippet = content_snippet(&sections).unwrap();

        assert_eq!(snippet.chars().count(), MAX_SNIPPET_CHARS);
    }
}
