//! Open Packaging Conventions (OPC) plumbing.
//!
//! A .docx file is an OPC package: a ZIP archive whose parts reference
//! each other through typed relationships and whose content types are
//! declared in a central manifest. This module provides the constants,
//! the relationship registry and the physical archive writer used to
//! assemble one.

pub mod constants;
pub mod phys;
pub mod rel;

pub use phys::PhysPkgWriter;
pub use rel::{RelRegistry, Relationship};

/// Escape XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_xml(r#"'"'"#), "&apos;&quot;&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
