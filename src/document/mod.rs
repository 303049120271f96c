//! Document model and package assembly.
//!
//! A [`Document`] collects body elements, registered images and hyperlink
//! relationships, then serializes everything into the fixed set of
//! package parts when saved.

pub mod paragraph;
pub mod styles;
pub mod table;

use crate::config::Config;
use crate::error::{DocxError, Result};
use crate::opc::constants::{content_type, namespace};
use crate::opc::rel::package_rels_xml;
use crate::opc::{PhysPkgWriter, RelRegistry};
use std::fmt::Write as FmtWrite;
use std::path::Path;

pub use paragraph::{Alignment, Hyperlink, Paragraph, ParagraphChild, Run, RunContainer, RunContent};
pub use table::{Table, TableCell, TableRow, VAlign};

/// Bytes and metadata of a registered image.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub data: Vec<u8>,
    pub content_type: String,
    pub width_px: u32,
    pub height_px: u32,
}

/// Top-level body element.
#[derive(Debug, Clone)]
pub enum BodyElement {
    Paragraph(Paragraph),
    Table(Table),
}

impl BodyElement {
    fn to_xml(&self, xml: &mut String) -> Result<()> {
        match self {
            Self::Paragraph(p) => p.to_xml(xml),
            Self::Table(t) => t.to_xml(xml),
        }
    }
}

/// Image extensions always present in the content-type manifest.
const FIXED_IMAGE_EXTENSIONS: [(&str, &str); 4] = [
    ("png", content_type::PNG),
    ("jpg", content_type::JPEG),
    ("jpeg", content_type::JPEG),
    ("gif", content_type::GIF),
];

/// Map an image content-type to a filename extension.
///
/// Unknown content-types degrade to "png" rather than failing; the bytes
/// are stored as-is either way.
fn extension_for_content_type(ct: &str) -> &'static str {
    match ct {
        content_type::JPEG => "jpg",
        content_type::GIF => "gif",
        content_type::SVG => "svg",
        _ => "png",
    }
}

/// A document being built.
///
/// Elements, images and hyperlinks are appended in order; [`Document::save`]
/// performs the single serialization pass. The document is single-owner
/// and never mutated during serialization.
#[derive(Debug)]
pub struct Document {
    config: Config,
    elements: Vec<BodyElement>,
    media: Vec<(String, ImageData)>,
    rels: RelRegistry,
}

impl Document {
    /// Create an empty document with the given style configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            elements: Vec::new(),
            media: Vec::new(),
            rels: RelRegistry::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Append a paragraph to the body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.elements.push(BodyElement::Paragraph(paragraph));
    }

    /// Append a table to the body.
    pub fn add_table(&mut self, table: Table) {
        self.elements.push(BodyElement::Table(table));
    }

    /// Register image bytes and return the relationship id to reference
    /// from an image run.
    ///
    /// The n-th image gets id `rId{10+n}` and is stored as
    /// `word/media/image{n}.{ext}`, with the extension derived from the
    /// content-type (unknown types fall back to png).
    pub fn add_image(
        &mut self,
        data: Vec<u8>,
        content_type: &str,
        width_px: u32,
        height_px: u32,
    ) -> String {
        let ext = extension_for_content_type(content_type);
        let filename = format!("image{}.{}", self.rels.image_count() + 1, ext);
        let rel_id = self.rels.add_image(&format!("media/{filename}"));
        self.media.push((
            filename,
            ImageData {
                data,
                content_type: content_type.to_string(),
                width_px,
                height_px,
            },
        ));
        rel_id
    }

    /// Register an external hyperlink target and return the relationship
    /// id to pass to `Paragraph::add_hyperlink`.
    ///
    /// The m-th hyperlink gets id `rId{1000+m}`, independent of how many
    /// images were registered.
    pub fn add_hyperlink(&mut self, target: &str) -> String {
        self.rels.add_hyperlink(target)
    }

    /// Registered media entries, in registration order.
    pub fn media(&self) -> &[(String, ImageData)] {
        &self.media
    }

    /// Serialize the content-type manifest.
    ///
    /// Fixed defaults cover the relationship and XML parts plus the
    /// common image extensions; any other extension actually registered
    /// (e.g., svg) is declared with its own content-type.
    pub fn content_types_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
        write!(xml, "<Types xmlns=\"{}\">", namespace::CONTENT_TYPES)
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        write!(
            xml,
            "<Default Extension=\"rels\" ContentType=\"{}\"/><Default Extension=\"xml\" ContentType=\"{}\"/>",
            content_type::OPC_RELATIONSHIPS,
            content_type::XML
        )
        .map_err(|e| DocxError::Xml(e.to_string()))?;

        for (ext, ct) in FIXED_IMAGE_EXTENSIONS {
            write!(xml, "<Default Extension=\"{ext}\" ContentType=\"{ct}\"/>")
                .map_err(|e| DocxError::Xml(e.to_string()))?;
        }

        let mut extra: Vec<(&str, &str)> = Vec::new();
        for (name, img) in &self.media {
            let ext = name.rsplit('.').next().unwrap_or("png");
            if FIXED_IMAGE_EXTENSIONS.iter().any(|(e, _)| *e == ext) {
                continue;
            }
            if !extra.iter().any(|(e, _)| *e == ext) {
                extra.push((ext, img.content_type.as_str()));
            }
        }
        for (ext, ct) in extra {
            write!(xml, "<Default Extension=\"{ext}\" ContentType=\"{ct}\"/>")
                .map_err(|e| DocxError::Xml(e.to_string()))?;
        }

        write!(
            xml,
            "<Override PartName=\"/word/document.xml\" ContentType=\"{}\"/><Override PartName=\"/word/styles.xml\" ContentType=\"{}\"/>",
            content_type::WML_DOCUMENT_MAIN,
            content_type::WML_STYLES
        )
        .map_err(|e| DocxError::Xml(e.to_string()))?;

        xml.push_str("</Types>");
        Ok(xml)
    }

    /// Serialize the main document part.
    ///
    /// Body elements appear in insertion order, followed by the fixed A4
    /// page geometry.
    pub fn document_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
        write!(
            xml,
            "<w:document xmlns:w=\"{}\" xmlns:wp=\"{}\" xmlns:a=\"{}\" xmlns:pic=\"{}\" xmlns:r=\"{}\">",
            namespace::WML_MAIN,
            namespace::WP_DRAWING,
            namespace::DRAWING_MAIN,
            namespace::PICTURE,
            namespace::OFFICE_RELATIONSHIPS
        )
        .map_err(|e| DocxError::Xml(e.to_string()))?;
        xml.push_str("<w:body>");

        for element in &self.elements {
            element.to_xml(&mut xml)?;
        }

        // A4 page with the conventional margins
        xml.push_str(concat!(
            "<w:sectPr>",
            "<w:pgSz w:w=\"11906\" w:h=\"16838\"/>",
            "<w:pgMar w:top=\"1440\" w:right=\"1800\" w:bottom=\"1440\" w:left=\"1800\" w:header=\"851\" w:footer=\"992\" w:gutter=\"0\"/>",
            "</w:sectPr>",
        ));

        xml.push_str("</w:body></w:document>");
        Ok(xml)
    }

    /// Assemble the complete package in memory.
    ///
    /// Parts are written in a fixed order: the content-type manifest, the
    /// package relationships, the document relationships, the style
    /// sheet, the document body, then media in registration order.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = PhysPkgWriter::new();

        writer.write("[Content_Types].xml", self.content_types_xml()?.as_bytes())?;
        writer.write("_rels/.rels", package_rels_xml()?.as_bytes())?;
        writer.write(
            "word/_rels/document.xml.rels",
            self.rels.to_part_xml()?.as_bytes(),
        )?;
        writer.write(
            "word/styles.xml",
            styles::generate_styles_xml(&self.config)?.as_bytes(),
        )?;
        writer.write("word/document.xml", self.document_xml()?.as_bytes())?;

        for (name, img) in &self.media {
            writer.write(&format!("word/media/{name}"), &img.data)?;
        }

        writer.finish()
    }

    /// Save the package to disk, creating parent directories as needed.
    ///
    /// The write is not atomic: a failure mid-way can leave a truncated
    /// file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}
