//! Style configuration for generated documents.
//!
//! The configuration mirrors the YAML layout hosts use to theme their
//! output: a `styles` section with the body style, nine heading levels and
//! the two code styles, plus table options. Loading the YAML text from
//! disk is the host's job; this module only deserializes a string slice.

use crate::error::{DocxError, Result};
use serde::Deserialize;

/// Formatting settings for one named style.
///
/// Lengths are in twips (1/20 pt); `size` is in points. Zero or empty
/// means "unset" and inherits from the body style where that makes sense.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleSettings {
    pub font: String,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: String,
    pub background: String,
    /// Line height in twips (240 = single, 360 = 1.5 lines)
    pub line_height: i64,
    /// Space before the paragraph in twips
    pub space_before: i64,
    /// Space after the paragraph in twips
    pub space_after: i64,
    /// First-line indent in twips
    pub first_line_indent: i64,
}

impl StyleSettings {
    fn themed(font: &str, size: f64, bold: bool) -> Self {
        Self {
            font: font.to_string(),
            size,
            bold,
            ..Self::default()
        }
    }
}

/// Table formatting options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableSettings {
    pub font: String,
    pub size: f64,
    pub borders: bool,
    pub header_bold: bool,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            font: String::new(),
            size: 0.0,
            borders: true,
            header_bold: true,
        }
    }
}

/// The `styles` section of the configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Styles {
    pub body: StyleSettings,
    pub heading1: StyleSettings,
    pub heading2: StyleSettings,
    pub heading3: StyleSettings,
    pub heading4: StyleSettings,
    pub heading5: StyleSettings,
    pub heading6: StyleSettings,
    pub heading7: StyleSettings,
    pub heading8: StyleSettings,
    pub heading9: StyleSettings,
    pub code: StyleSettings,
    pub code_block: StyleSettings,
}

/// Complete document configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub styles: Styles,
    pub table: TableSettings,
}

impl Config {
    /// Deserialize a configuration from YAML text.
    ///
    /// Fields absent from the YAML are left unset (zero/empty) and fall
    /// back to the body style during style-sheet generation.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| DocxError::InvalidFormat(e.to_string()))
    }

    /// Get the style settings for a heading level (1-9).
    ///
    /// Out-of-range levels return the body style.
    pub fn heading_style(&self, level: u8) -> &StyleSettings {
        match level {
            1 => &self.styles.heading1,
            2 => &self.styles.heading2,
            3 => &self.styles.heading3,
            4 => &self.styles.heading4,
            5 => &self.styles.heading5,
            6 => &self.styles.heading6,
            7 => &self.styles.heading7,
            8 => &self.styles.heading8,
            9 => &self.styles.heading9,
            _ => &self.styles.body,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            styles: Styles {
                body: StyleSettings::themed("Calibri", 11.0, false),
                heading1: StyleSettings::themed("Calibri", 18.0, true),
                heading2: StyleSettings::themed("Calibri", 16.0, true),
                heading3: StyleSettings::themed("Calibri", 14.0, true),
                heading4: StyleSettings::themed("Calibri", 12.0, true),
                heading5: StyleSettings::themed("Calibri", 11.0, true),
                heading6: StyleSettings::themed("Calibri", 11.0, true),
                heading7: StyleSettings::themed("Calibri", 11.0, true),
                heading8: StyleSettings::themed("Calibri", 11.0, true),
                heading9: StyleSettings::themed("Calibri", 11.0, true),
                code: StyleSettings::themed("Consolas", 10.5, false),
                code_block: StyleSettings::themed("Consolas", 10.5, false),
            },
            table: TableSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_partial() {
        let cfg = Config::from_yaml(
            r#"
styles:
  body:
    font: "Times New Roman"
    size: 12
  heading1:
    font: "Arial"
    size: 20
    bold: true
table:
  borders: false
"#,
        )
        .unwrap();

        assert_eq!(cfg.styles.body.font, "Times New Roman");
        assert_eq!(cfg.styles.body.size, 12.0);
        assert_eq!(cfg.styles.heading1.font, "Arial");
        assert!(cfg.styles.heading1.bold);
        // Unspecified levels stay unset
        assert!(cfg.styles.heading2.font.is_empty());
        assert_eq!(cfg.styles.heading2.size, 0.0);
        assert!(!cfg.table.borders);
    }

    #[test]
    fn test_from_yaml_camel_case_keys() {
        let cfg = Config::from_yaml(
            r#"
styles:
  body:
    lineHeight: 360
    spaceBefore: 120
    spaceAfter: 120
    firstLineIndent: 210
"#,
        )
        .unwrap();

        assert_eq!(cfg.styles.body.line_height, 360);
        assert_eq!(cfg.styles.body.space_before, 120);
        assert_eq!(cfg.styles.body.space_after, 120);
        assert_eq!(cfg.styles.body.first_line_indent, 210);
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(Config::from_yaml("styles: [not, a, map]").is_err());
    }

    #[test]
    fn test_heading_style_fallback() {
        let cfg = Config::default();
        assert_eq!(cfg.heading_style(1).size, 18.0);
        assert_eq!(cfg.heading_style(9).size, 11.0);
        // Out of range falls back to body
        assert_eq!(cfg.heading_style(0).size, 11.0);
        assert_eq!(cfg.heading_style(10).font, cfg.styles.body.font);
    }

    #[test]
    fn test_default_theme() {
        let cfg = Config::default();
        assert_eq!(cfg.styles.code.font, "Consolas");
        assert_eq!(cfg.styles.code.size, 10.5);
        assert!(cfg.table.borders);
        assert!(cfg.table.header_bold);
    }
}
