//! Block-level document nodes and the section assembler.

use super::{HeadingRank, SectionSpec};

/// One block-level node of a document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Document title: largest rank, centered.
    Title(String),
    Heading { text: String, rank: HeadingRank },
    Paragraph(String),
}

impl Block {
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Block::Title(text) | Block::Paragraph(text) => text,
            Block::Heading { text, .. } => text,
        }
    }
}

/// Ordered blocks; always starts with exactly one [`Block::Title`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSequence {
    blocks: Vec<Block>,
}

impl BlockSequence {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn title(&self) -> &str {
        self.blocks.first().map(Block::text).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a BlockSequence {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Converts a title and ordered sections into document blocks.
///
/// Emits the title, then per section one heading followed by one paragraph
/// per non-blank content line. A section with no such lines yields a lone
/// heading.
pub fn assemble(title: &str, sections: &[SectionSpec]) -> BlockSequence {
    let mut blocks = Vec::with_capacity(1 + sections.len() * 2);
    blocks.push(Block::Title(title.to_string()));

    for section in sections {
        blocks.push(Block::Heading {
            text: section.title.trim().to_string(),
            rank: section.rank(),
        });
        blocks.extend(
            section
                .paragraphs()
                .map(|line| Block::Paragraph(line.to_string())),
        );
    }

    BlockSequence { blocks }
}
