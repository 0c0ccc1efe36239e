//! DOCX adapter - hand-built Office Open XML packages.
//!
//! Parts are rendered as XML strings and zipped with Deflate. The package
//! layout is:
//!
//! ```text
//! [Content_Types].xml
//! _rels/.rels
//! docProps/core.xml
//! docProps/app.xml
//! word/document.xml
//! word/styles.xml
//! word/_rels/document.xml.rels
//! word/media/logo.<ext>        (only when a logo decodes)
//! ```

mod encoder;
mod parts;
mod xml;

pub use encoder::{DocxEncoder, DocxPackage, DEFAULT_APPLICATION_NAME};
pub use parts::{
    EMU_PER_PIXEL, LOGO_HEIGHT_PX, LOGO_WIDTH_PX, PART_APP_PROPS, PART_CONTENT_TYPES,
    PART_CORE_PROPS, PART_DOCUMENT, PART_DOCUMENT_RELS, PART_ROOT_RELS, PART_STYLES,
};
