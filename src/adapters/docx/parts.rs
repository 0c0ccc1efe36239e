//! WordprocessingML part builders.
//!
//! Each function renders one package part as a UTF-8 XML string. Only the
//! subset of OOXML needed for styled headings, paragraphs and one inline
//! picture is emitted.

use crate::domain::branding::{HexColor, LogoFormat};
use crate::domain::document::{Block, BlockSequence};
use crate::domain::foundation::Timestamp;

use super::xml::xml_escape;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

pub const PART_CONTENT_TYPES: &str = "[Content_Types].xml";
pub const PART_ROOT_RELS: &str = "_rels/.rels";
pub const PART_DOCUMENT: &str = "word/document.xml";
pub const PART_DOCUMENT_RELS: &str = "word/_rels/document.xml.rels";
pub const PART_STYLES: &str = "word/styles.xml";
pub const PART_CORE_PROPS: &str = "docProps/core.xml";
pub const PART_APP_PROPS: &str = "docProps/app.xml";

/// Relationship id of the embedded logo inside `document.xml.rels`.
pub const LOGO_REL_ID: &str = "rIdLogo";

/// EMUs per CSS pixel at 96 DPI.
pub const EMU_PER_PIXEL: i64 = 9525;
pub const LOGO_WIDTH_PX: i64 = 200;
pub const LOGO_HEIGHT_PX: i64 = 100;

/// Spacing after the title paragraph, in twentieths of a point.
const TITLE_SPACING_AFTER: u32 = 400;
/// Spacing after each body paragraph.
const PARAGRAPH_SPACING_AFTER: u32 = 200;

/// Package path of the logo media part.
pub fn logo_part_name(format: LogoFormat) -> String {
    format!("word/media/logo.{}", format.extension())
}

pub fn content_types(logo: Option<LogoFormat>) -> String {
    let image_default = logo
        .map(|f| {
            format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                f.extension(),
                f.content_type()
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            "{decl}",
            r#"<Types xmlns="{ns}">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            "{image}",
            r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
            r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
            r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
            r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#,
            "</Types>"
        ),
        decl = XML_DECL,
        ns = NS_CONTENT_TYPES,
        image = image_default,
    )
}

pub fn root_relationships() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Relationships xmlns="{ns}">"#,
            r#"<Relationship Id="rId1" Type="{doc}" Target="word/document.xml"/>"#,
            r#"<Relationship Id="rId2" Type="{core}" Target="docProps/core.xml"/>"#,
            r#"<Relationship Id="rId3" Type="{app}" Target="docProps/app.xml"/>"#,
            "</Relationships>"
        ),
        decl = XML_DECL,
        ns = NS_PKG_RELS,
        doc = REL_OFFICE_DOCUMENT,
        core = REL_CORE_PROPS,
        app = REL_EXTENDED_PROPS,
    )
}

pub fn document_relationships(logo: Option<LogoFormat>) -> String {
    let image_rel = logo
        .map(|f| {
            format!(
                r#"<Relationship Id="{}" Type="{}" Target="media/logo.{}"/>"#,
                LOGO_REL_ID,
                REL_IMAGE,
                f.extension()
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            "{decl}",
            r#"<Relationships xmlns="{ns}">"#,
            r#"<Relationship Id="rId1" Type="{styles}" Target="styles.xml"/>"#,
            "{image}",
            "</Relationships>"
        ),
        decl = XML_DECL,
        ns = NS_PKG_RELS,
        styles = REL_STYLES,
        image = image_rel,
    )
}

/// Style sheet with the two coloured heading styles.
///
/// `Heading1` takes the primary colour, `Heading2` the secondary colour;
/// `Heading3` keeps the default text colour.
pub fn styles(primary: &HexColor, secondary: &HexColor) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(r#"<w:styles xmlns:w="{}">"#, NS_W));
    xml.push_str(concat!(
        "<w:docDefaults>",
        r#"<w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault>"#,
        "<w:pPrDefault><w:pPr/></w:pPrDefault>",
        "</w:docDefaults>",
        r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
        r#"<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
        r#"<w:pPr><w:spacing w:after="400"/><w:jc w:val="center"/></w:pPr>"#,
        r#"<w:rPr><w:b/><w:sz w:val="56"/><w:szCs w:val="56"/></w:rPr></w:style>"#,
    ));
    xml.push_str(&heading_style(1, Some(primary), 32));
    xml.push_str(&heading_style(2, Some(secondary), 26));
    xml.push_str(&heading_style(3, None, 24));
    xml.push_str("</w:styles>");
    xml
}

fn heading_style(level: u8, color: Option<&HexColor>, half_points: u32) -> String {
    let (bold, color) = match color {
        Some(c) => (
            "<w:b/><w:bCs/>",
            format!(r#"<w:color w:val="{}"/>"#, c.hex_digits()),
        ),
        None => ("", String::new()),
    };
    format!(
        concat!(
            r#"<w:style w:type="paragraph" w:styleId="Heading{lvl}">"#,
            r#"<w:name w:val="heading {lvl}"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
            r#"<w:pPr><w:keepNext/><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="{outline}"/></w:pPr>"#,
            r#"<w:rPr>{bold}{color}<w:sz w:val="{sz}"/><w:szCs w:val="{sz}"/></w:rPr>"#,
            "</w:style>"
        ),
        lvl = level,
        outline = level - 1,
        bold = bold,
        color = color,
        sz = half_points,
    )
}

/// Main document part. When `logo` is set, a centered inline picture
/// precedes the title.
pub fn document(blocks: &BlockSequence, logo: Option<LogoFormat>) -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(
        r#"<w:document xmlns:w="{}" xmlns:r="{}" xmlns:wp="{}" xmlns:a="{}" xmlns:pic="{}"><w:body>"#,
        NS_W, NS_R, NS_WP, NS_A, NS_PIC
    ));

    if let Some(format) = logo {
        xml.push_str(&logo_paragraph(format));
    }

    for block in blocks {
        match block {
            Block::Title(text) => xml.push_str(&paragraph(
                &format!(
                    r#"<w:pStyle w:val="Title"/><w:spacing w:after="{}"/><w:jc w:val="center"/>"#,
                    TITLE_SPACING_AFTER
                ),
                text,
            )),
            Block::Heading { text, rank } => xml.push_str(&paragraph(
                &format!(r#"<w:pStyle w:val="{}"/>"#, rank.style_id()),
                text,
            )),
            Block::Paragraph(text) => xml.push_str(&paragraph(
                &format!(r#"<w:spacing w:after="{}"/>"#, PARAGRAPH_SPACING_AFTER),
                text,
            )),
        }
    }

    xml.push_str(concat!(
        "<w:sectPr>",
        r#"<w:pgSz w:w="12240" w:h="15840"/>"#,
        r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>"#,
        "</w:sectPr>",
        "</w:body></w:document>"
    ));
    xml
}

fn paragraph(properties: &str, text: &str) -> String {
    format!(
        r#"<w:p><w:pPr>{}</w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        properties,
        xml_escape(text)
    )
}

fn logo_paragraph(format: LogoFormat) -> String {
    let cx = LOGO_WIDTH_PX * EMU_PER_PIXEL;
    let cy = LOGO_HEIGHT_PX * EMU_PER_PIXEL;
    format!(
        concat!(
            r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:drawing>"#,
            r#"<wp:inline distT="0" distB="0" distL="0" distR="0">"#,
            r#"<wp:extent cx="{cx}" cy="{cy}"/>"#,
            r#"<wp:docPr id="1" name="Logo"/>"#,
            r#"<wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect="1"/></wp:cNvGraphicFramePr>"#,
            r#"<a:graphic><a:graphicData uri="{pic_ns}"><pic:pic>"#,
            r#"<pic:nvPicPr><pic:cNvPr id="0" name="logo.{ext}"/><pic:cNvPicPr/></pic:nvPicPr>"#,
            r#"<pic:blipFill><a:blip r:embed="{rel}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>"#,
            r#"<pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr>"#,
            r#"</pic:pic></a:graphicData></a:graphic></wp:inline>"#,
            r#"</w:drawing></w:r></w:p>"#
        ),
        cx = cx,
        cy = cy,
        pic_ns = NS_PIC,
        ext = format.extension(),
        rel = LOGO_REL_ID,
    )
}

pub fn core_properties(title: &str, creator: &str, created: Timestamp) -> String {
    let stamp = created.to_w3cdtf();
    format!(
        concat!(
            "{decl}",
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{title}</dc:title>",
            "<dc:creator>{creator}</dc:creator>",
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created>"#,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified>"#,
            "</cp:coreProperties>"
        ),
        decl = XML_DECL,
        title = xml_escape(title),
        creator = xml_escape(creator),
        stamp = stamp,
    )
}

pub fn app_properties(application: &str) -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{app}</Application>",
            "</Properties>"
        ),
        decl = XML_DECL,
        app = xml_escape(application),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{assemble, SectionSpec};

    #[test]
    fn styles_color_first_two_heading_ranks_only() {
        let primary = HexColor::parse("p", "#112233").unwrap();
        let secondary = HexColor::parse("s", "#445566").unwrap();

        let xml = styles(&primary, &secondary);

        let h1 = &xml[xml.find(r#"w:styleId="Heading1""#).unwrap()..];
        let h1 = &h1[..h1.find("</w:style>").unwrap()];
        assert!(h1.contains(r#"<w:color w:val="112233"/>"#));
        assert!(h1.contains("<w:b/>"));

        let h2 = &xml[xml.find(r#"w:styleId="Heading2""#).unwrap()..];
        let h2 = &h2[..h2.find("</w:style>").unwrap()];
        assert!(h2.contains(r#"<w:color w:val="445566"/>"#));
        assert!(h2.contains("<w:b/>"));

        let h3 = &xml[xml.find(r#"w:styleId="Heading3""#).unwrap()..];
        let h3 = &h3[..h3.find("</w:style>").unwrap()];
        assert!(!h3.contains("w:color"));
    }

    #[test]
    fn document_places_logo_before_title() {
        let blocks = assemble("Plan (v1)", &[]);

        let xml = document(&blocks, Some(LogoFormat::Png));

        let drawing = xml.find("<w:drawing>").unwrap();
        let title = xml.find(r#"<w:pStyle w:val="Title"/>"#).unwrap();
        assert!(drawing < title);
        assert!(xml.contains(r#"<wp:extent cx="1905000" cy="952500"/>"#));
        assert!(xml.contains(r#"r:embed="rIdLogo""#));
    }

    #[test]
    fn document_without_logo_has_no_drawing() {
        let blocks = assemble("Plan (v1)", &[]);

        let xml = document(&blocks, None);

        assert!(!xml.contains("<w:drawing>"));
        assert_eq!(xml.matches(r#"<w:pStyle w:val="Title"/>"#).count(), 1);
    }

    #[test]
    fn document_escapes_block_text() {
        let sections = vec![SectionSpec::new("R&D", "<b>bold</b>").with_level(2)];
        let blocks = assemble("A & B", &sections);

        let xml = document(&blocks, None);

        assert!(xml.contains("A &amp; B"));
        assert!(xml.contains(r#"<w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t xml:space="preserve">R&amp;D"#));
        assert!(xml.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn content_types_register_logo_extension() {
        let with_logo = content_types(Some(LogoFormat::Jpeg));
        let without = content_types(None);

        assert!(with_logo.contains(r#"<Default Extension="jpeg" ContentType="image/jpeg"/>"#));
        assert!(!without.contains("image/"));
    }

    #[test]
    fn document_relationships_reference_logo_media() {
        let rels = document_relationships(Some(LogoFormat::Png));

        assert!(rels.contains(r#"Id="rIdLogo""#));
        assert!(rels.contains(r#"Target="media/logo.png""#));
        assert!(!document_relationships(None).contains("rIdLogo"));
    }

    #[test]
    fn core_properties_carry_title() {
        let xml = core_properties("Plan <v1>", "Business Assistant", Timestamp::now());

        assert!(xml.contains("<dc:title>Plan &lt;v1&gt;</dc:title>"));
        assert!(xml.contains("dcterms:W3CDTF"));
    }
}
