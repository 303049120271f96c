//! mdocx - A Rust library for building Word (.docx) documents
//!
//! This library assembles an in-memory model of paragraphs, tables,
//! images and hyperlinks into a valid OOXML package: a ZIP archive whose
//! parts ([Content_Types].xml, relationship files, styles.xml,
//! document.xml, media) cross-reference each other correctly.
//!
//! It is the output half of a Markdown-to-Word pipeline: parsing and
//! image rendering happen elsewhere and hand over resolved runs and
//! finished image bytes.
//!
//! # Features
//!
//! - **Document model**: paragraphs, styled runs, hyperlinks, tables
//! - **Images**: inline images with EMU extents and automatic
//!   relationship/media bookkeeping
//! - **Styles**: configurable style sheet (body, nine heading levels,
//!   code, table grid) generated from a YAML-friendly configuration
//! - **Deterministic output**: identical input produces identical bytes
//!
//! # Example
//!
//! ```no_run
//! use mdocx::{Config, Document, Paragraph, RunContainer};
//!
//! # fn main() -> mdocx::Result<()> {
//! let mut doc = Document::new(Config::default());
//!
//! let mut heading = Paragraph::with_style("Heading1");
//! heading.add_run("Report");
//! doc.add_paragraph(heading);
//!
//! let url = doc.add_hyperlink("https://example.com");
//! let mut p = Paragraph::new();
//! p.add_run("See ");
//! let link = p.add_hyperlink(&url);
//! link.add_run("the site");
//! link.finalize_link_style();
//! doc.add_paragraph(p);
//!
//! doc.save("report.docx")?;
//! # Ok(())
//! # }
//! ```

/// Style configuration types and YAML loading
pub mod config;

/// Document model: paragraphs, runs, tables and package assembly
pub mod document;

/// Error types
pub mod error;

/// Open Packaging Conventions plumbing (relationships, archive writer)
pub mod opc;

/// Length-unit conversions (points, twips, half-points, EMUs)
pub mod unit;

// Re-export commonly used types for convenience
pub use config::{Config, StyleSettings, TableSettings};
pub use document::{
    Alignment, BodyElement, Document, Hyperlink, ImageData, Paragraph, Run, RunContainer,
    RunContent, Table, TableCell, TableRow, VAlign,
};
pub use error::{DocxError, Result};
