//! Relationship bookkeeping for the document part.
//!
//! Every image and hyperlink in the document body refers to its target
//! through a relationship id (`r:embed`, `r:id`). The registry hands out
//! those ids and later serializes the full `word/_rels/document.xml.rels`
//! part.

use crate::error::{DocxError, Result};
use crate::opc::constants::{relationship_type, namespace, target_mode};
use crate::opc::escape_xml;
use std::fmt::Write as FmtWrite;

/// A single relationship entry.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship id (e.g., "rId11")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target reference, part-relative or external
    pub target: String,
    /// Whether the target lies outside the package
    pub external: bool,
}

impl Relationship {
    fn to_xml(&self, xml: &mut String) -> Result<()> {
        if self.external {
            write!(
                xml,
                "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\" TargetMode=\"{}\"/>",
                escape_xml(&self.id),
                escape_xml(&self.rel_type),
                escape_xml(&self.target),
                target_mode::EXTERNAL
            )
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        } else {
            write!(
                xml,
                "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>",
                escape_xml(&self.id),
                escape_xml(&self.rel_type),
                escape_xml(&self.target)
            )
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        }
        Ok(())
    }
}

/// Registry of content relationships for the main document part.
///
/// Images and hyperlinks draw ids from two independent counters so that
/// interleaved registration never shifts either sequence: the n-th image
/// gets `rId{10 + n}` (ids 1-10 are reserved for fixed parts) and the
/// m-th hyperlink gets `rId{1000 + m}`.
#[derive(Debug, Default)]
pub struct RelRegistry {
    rels: Vec<Relationship>,
    image_count: u32,
    hyperlink_count: u32,
}

impl RelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image relationship and return its id.
    ///
    /// `target` is relative to the document part, e.g. "media/image1.png".
    pub fn add_image(&mut self, target: &str) -> String {
        self.image_count += 1;
        let id = format!("rId{}", self.image_count + 10);
        self.rels.push(Relationship {
            id: id.clone(),
            rel_type: relationship_type::IMAGE.to_string(),
            target: target.to_string(),
            external: false,
        });
        id
    }

    /// Register an external hyperlink relationship and return its id.
    pub fn add_hyperlink(&mut self, target: &str) -> String {
        self.hyperlink_count += 1;
        let id = format!("rId{}", self.hyperlink_count + 1000);
        self.rels.push(Relationship {
            id: id.clone(),
            rel_type: relationship_type::HYPERLINK.to_string(),
            target: target.to_string(),
            external: true,
        });
        id
    }

    /// Number of images registered so far.
    pub fn image_count(&self) -> u32 {
        self.image_count
    }

    /// All registered relationships, in registration order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.rels
    }

    /// Serialize the `word/_rels/document.xml.rels` part.
    ///
    /// The fixed styles relationship comes first, then content
    /// relationships in registration order.
    pub fn to_part_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + self.rels.len() * 128);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
        write!(xml, "<Relationships xmlns=\"{}\">", namespace::RELATIONSHIPS)
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        write!(
            xml,
            "<Relationship Id=\"rId1\" Type=\"{}\" Target=\"styles.xml\"/>",
            relationship_type::STYLES
        )
        .map_err(|e| DocxError::Xml(e.to_string()))?;
        for rel in &self.rels {
            rel.to_xml(&mut xml)?;
        }
        xml.push_str("</Relationships>");
        Ok(xml)
    }
}

/// Serialize the package-level `_rels/.rels` part.
///
/// It contains a single relationship pointing at the main document part.
pub fn package_rels_xml() -> Result<String> {
    let mut xml = String::with_capacity(384);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
    write!(
        xml,
        "<Relationships xmlns=\"{}\"><Relationship Id=\"rId1\" Type=\"{}\" Target=\"word/document.xml\"/></Relationships>",
        namespace::RELATIONSHIPS,
        relationship_type::OFFICE_DOCUMENT
    )
    .map_err(|e| DocxError::Xml(e.to_string()))?;
    Ok(xml)
}
