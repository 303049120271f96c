//! Style-sheet generation for the `word/styles.xml` part.
//!
//! The style sheet is derived purely from the configuration: document
//! defaults, the Normal style, the nine heading styles, the Code block
//! style and the TableGrid table style. Identical configurations produce
//! identical output.

use crate::config::{Config, StyleSettings};
use crate::error::{DocxError, Result};
use crate::opc::constants::namespace;
use crate::opc::escape_xml;
use crate::unit::pt_to_half_points;
use std::fmt::Write as FmtWrite;

/// Chinese font-size names mapped to their point sizes.
static CHINESE_FONT_SIZES: phf::Map<&'static str, f64> = phf::phf_map! {
    "初号" => 42.0,
    "小初" => 36.0,
    "一号" => 26.0,
    "小一" => 24.0,
    "二号" => 22.0,
    "小二" => 18.0,
    "三号" => 16.0,
    "小三" => 15.0,
    "四号" => 14.0,
    "小四" => 12.0,
    "五号" => 10.5,
    "小五" => 9.0,
    "六号" => 7.5,
    "小六" => 6.5,
    "七号" => 5.5,
    "八号" => 5.0,
};

/// Look up a Chinese font-size name (e.g., "五号" = 10.5pt).
pub fn chinese_font_size(name: &str) -> Option<f64> {
    CHINESE_FONT_SIZES.get(name).copied()
}

/// Effective font for a style, falling back to the body font when unset.
fn effective_font<'a>(style: &'a StyleSettings, body: &'a StyleSettings) -> &'a str {
    if style.font.is_empty() {
        &body.font
    } else {
        &style.font
    }
}

/// Effective size for a style, falling back to the body size when unset.
fn effective_size(style: &StyleSettings, body: &StyleSettings) -> f64 {
    if style.size > 0.0 { style.size } else { body.size }
}

/// Generate the complete styles.xml part from the configuration.
pub fn generate_styles_xml(config: &Config) -> Result<String> {
    let body = &config.styles.body;
    let body_font = escape_xml(&body.font);
    let body_sz = pt_to_half_points(body.size);

    let mut xml = String::with_capacity(4096);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
    write!(xml, "<w:styles xmlns:w=\"{}\">", namespace::WML_MAIN)
        .map_err(|e| DocxError::Xml(e.to_string()))?;

    // Document defaults
    write!(
        xml,
        concat!(
            "<w:docDefaults>",
            "<w:rPrDefault><w:rPr>",
            "<w:rFonts w:ascii=\"{font}\" w:eastAsia=\"{font}\" w:hAnsi=\"{font}\"/>",
            "<w:sz w:val=\"{sz}\"/><w:szCs w:val=\"{sz}\"/>",
            "</w:rPr></w:rPrDefault>",
            "<w:pPrDefault><w:pPr>",
            "<w:spacing w:after=\"0\" w:line=\"276\" w:lineRule=\"auto\"/>",
            "</w:pPr></w:pPrDefault>",
            "</w:docDefaults>",
        ),
        font = body_font,
        sz = body_sz
    )
    .map_err(|e| DocxError::Xml(e.to_string()))?;

    // Normal
    write!(
        xml,
        concat!(
            "<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\">",
            "<w:name w:val=\"Normal\"/>",
            "<w:rPr>",
            "<w:rFonts w:ascii=\"{font}\" w:eastAsia=\"{font}\" w:hAnsi=\"{font}\"/>",
            "<w:sz w:val=\"{sz}\"/><w:szCs w:val=\"{sz}\"/>",
            "</w:rPr>",
            "</w:style>",
        ),
        font = body_font,
        sz = body_sz
    )
    .map_err(|e| DocxError::Xml(e.to_string()))?;

    // Heading1..Heading9
    for level in 1..=9u8 {
        let style = config.heading_style(level);
        let font = escape_xml(effective_font(style, body));
        let sz = pt_to_half_points(effective_size(style, body));

        write!(
            xml,
            concat!(
                "<w:style w:type=\"paragraph\" w:styleId=\"Heading{level}\">",
                "<w:name w:val=\"heading {level}\"/>",
                "<w:basedOn w:val=\"Normal\"/>",
                "<w:next w:val=\"Normal\"/>",
                "<w:pPr>",
                "<w:keepNext/><w:keepLines/>",
                "<w:spacing w:before=\"240\" w:after=\"120\"/>",
                "<w:outlineLvl w:val=\"{outline}\"/>",
                "</w:pPr>",
                "<w:rPr>",
                "<w:rFonts w:ascii=\"{font}\" w:eastAsia=\"{font}\" w:hAnsi=\"{font}\"/>",
                "<w:sz w:val=\"{sz}\"/><w:szCs w:val=\"{sz}\"/>",
            ),
            level = level,
            outline = level - 1,
            font = font,
            sz = sz
        )
        .map_err(|e| DocxError::Xml(e.to_string()))?;

        if style.bold {
            xml.push_str("<w:b/><w:bCs/>");
        }

        xml.push_str("</w:rPr></w:style>");
    }

    // Code block style
    let code_sz = pt_to_half_points(effective_size(&config.styles.code, body));
    write!(
        xml,
        concat!(
            "<w:style w:type=\"paragraph\" w:styleId=\"Code\">",
            "<w:name w:val=\"Code\"/>",
            "<w:basedOn w:val=\"Normal\"/>",
            "<w:pPr>",
            "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"F5F5F5\"/>",
            "<w:spacing w:before=\"120\" w:after=\"120\"/>",
            "</w:pPr>",
            "<w:rPr>",
            "<w:rFonts w:ascii=\"Consolas\" w:hAnsi=\"Consolas\" w:cs=\"Consolas\"/>",
            "<w:sz w:val=\"{sz}\"/><w:szCs w:val=\"{sz}\"/>",
            "</w:rPr>",
            "</w:style>",
        ),
        sz = code_sz
    )
    .map_err(|e| DocxError::Xml(e.to_string()))?;

    // Table style with single borders on all sides and interior edges
    xml.push_str(concat!(
        "<w:style w:type=\"table\" w:styleId=\"TableGrid\">",
        "<w:name w:val=\"Table Grid\"/>",
        "<w:basedOn w:val=\"TableNormal\"/>",
        "<w:tblPr>",
        "<w:tblBorders>",
        "<w:top w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
        "<w:left w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
        "<w:bottom w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
        "<w:right w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
        "<w:insideH w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
        "<w:insideV w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
        "</w:tblBorders>",
        "</w:tblPr>",
        "</w:style>",
    ));

    xml.push_str("</w:styles>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_defaults_from_body() {
        let mut config = Config::default();
        config.styles.body.font = "Georgia".to_string();
        config.styles.body.size = 12.0;
        let xml = generate_styles_xml(&config).unwrap();
        assert!(xml.contains(
            "<w:rFonts w:ascii=\"Georgia\" w:eastAsia=\"Georgia\" w:hAnsi=\"Georgia\"/>"
        ));
        assert!(xml.contains("<w:spacing w:after=\"0\" w:line=\"276\" w:lineRule=\"auto\"/>"));
        // Normal is the default paragraph style
        assert!(xml.contains("<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\">"));
    }

    #[test]
    fn test_all_heading_levels_present() {
        let xml = generate_styles_xml(&Config::default()).unwrap();
        for level in 1..=9 {
            assert!(xml.contains(&format!("w:styleId=\"Heading{level}\"")), "{level}");
            assert!(xml.contains(&format!("<w:outlineLvl w:val=\"{}\"/>", level - 1)));
        }
        assert!(xml.contains("<w:keepNext/><w:keepLines/>"));
        assert!(xml.contains("<w:spacing w:before=\"240\" w:after=\"120\"/>"));
    }

    #[test]
    fn test_heading_bold_marker() {
        let mut config = Config::default();
        config.styles.heading1.bold = true;
        config.styles.heading2.bold = false;
        let xml = generate_styles_xml(&config).unwrap();

        let h1 = xml.find("w:styleId=\"Heading1\"").unwrap();
        let h2 = xml.find("w:styleId=\"Heading2\"").unwrap();
        let h1_block = &xml[h1..h2];
        assert!(h1_block.contains("<w:b/><w:bCs/>"));

        let h3 = xml.find("w:styleId=\"Heading3\"").unwrap();
        let h2_block = &xml[h2..h3];
        assert!(!h2_block.contains("<w:b/>"));
    }

    #[test]
    fn test_heading_falls_back_to_body() {
        let mut config = Config::default();
        config.styles.body.font = "Georgia".to_string();
        config.styles.body.size = 12.0;
        config.styles.heading3 = StyleSettings::default();
        let xml = generate_styles_xml(&config).unwrap();

        let h3 = xml.find("w:styleId=\"Heading3\"").unwrap();
        let h4 = xml.find("w:styleId=\"Heading4\"").unwrap();
        let h3_block = &xml[h3..h4];
        assert!(h3_block.contains("w:ascii=\"Georgia\""));
        assert!(h3_block.contains("<w:sz w:val=\"24\"/>"));
    }

    #[test]
    fn test_code_style() {
        let xml = generate_styles_xml(&Config::default()).unwrap();
        assert!(xml.contains("w:styleId=\"Code\""));
        assert!(xml.contains("<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"F5F5F5\"/>"));
        // Default code size is 10.5pt
        let code = xml.find("w:styleId=\"Code\"").unwrap();
        assert!(xml[code..].contains("<w:sz w:val=\"21\"/>"));
    }

    #[test]
    fn test_table_grid_style() {
        let xml = generate_styles_xml(&Config::default()).unwrap();
        assert!(xml.contains("w:styleId=\"TableGrid\""));
        assert!(xml.contains("<w:insideH w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>"));
        assert!(xml.contains("<w:insideV w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>"));
    }

    #[test]
    fn test_deterministic_output() {
        let config = Config::default();
        assert_eq!(
            generate_styles_xml(&config).unwrap(),
            generate_styles_xml(&config).unwrap()
        );
    }

    #[test]
    fn test_chinese_font_sizes() {
        assert_eq!(chinese_font_size("五号"), Some(10.5));
        assert_eq!(chinese_font_size("小五"), Some(9.0));
        assert_eq!(chinese_font_size("初号"), Some(42.0));
        assert_eq!(chinese_font_size("九号"), None);
    }
}
