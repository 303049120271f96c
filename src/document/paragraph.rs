//! Paragraph, run and hyperlink types with their WordprocessingML encoders.
use crate::error::{DocxError, Result};
use crate::opc::escape_xml;
use crate::unit::pt_to_half_points;
use std::fmt::Write as FmtWrite;

/// Paragraph alignment.
///
/// Serialized with the ECMA-376 token set: `left` and `right` map to the
/// direction-aware `start` and `end` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "center",
            Self::Right => "end",
            Self::Justify => "justify",
        }
    }
}

/// Run content type.
///
/// A run carries either text or an inline image reference, never both.
#[derive(Debug, Clone)]
pub enum RunContent {
    /// Plain text (may contain newlines, rendered as line breaks)
    Text(String),
    /// Inline image referencing a registered image relationship
    Image {
        rel_id: String,
        width_emu: i64,
        height_emu: i64,
    },
}

/// A text or image run.
///
/// Runs hold character-level formatting. All formatting is optional;
/// `w:rPr` is only emitted when at least one attribute is set.
#[derive(Debug, Clone)]
pub struct Run {
    pub(crate) content: RunContent,
    pub(crate) bold: bool,
    pub(crate) italic: bool,
    pub(crate) underline: bool,
    pub(crate) strike: bool,
    pub(crate) font_name: Option<String>,
    pub(crate) font_size: Option<f64>,
    pub(crate) color: Option<String>,
    pub(crate) code: bool,
}

impl Run {
    pub(crate) fn text(text: &str) -> Self {
        Self {
            content: RunContent::Text(text.to_string()),
            bold: false,
            italic: false,
            underline: false,
            strike: false,
            font_name: None,
            font_size: None,
            color: None,
            code: false,
        }
    }

    pub(crate) fn image(rel_id: &str, width_emu: i64, height_emu: i64) -> Self {
        let mut run = Self::text("");
        run.content = RunContent::Image {
            rel_id: rel_id.to_string(),
            width_emu,
            height_emu,
        };
        run
    }

    /// Make the text bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    /// Make the text italic.
    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.italic = italic;
        self
    }

    /// Underline the text (single underline).
    pub fn underline(&mut self, underline: bool) -> &mut Self {
        self.underline = underline;
        self
    }

    /// Strike the text through.
    pub fn strike(&mut self, strike: bool) -> &mut Self {
        self.strike = strike;
        self
    }

    /// Set font name, applied to the ascii, eastAsia and hAnsi slots.
    pub fn font_name(&mut self, name: &str) -> &mut Self {
        self.font_name = Some(name.to_string());
        self
    }

    /// Set font size in points (e.g., 10.5).
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.font_size = Some(size);
        self
    }

    /// Set text color as hex RGB; a leading `#` is stripped on output.
    pub fn color(&mut self, color: &str) -> &mut Self {
        self.color = Some(color.to_string());
        self
    }

    /// Mark the run as inline code (monospace font plus light shading).
    pub fn code(&mut self, code: bool) -> &mut Self {
        self.code = code;
        self
    }

    fn has_properties(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.strike
            || self.font_name.is_some()
            || self.font_size.is_some()
            || self.color.is_some()
            || self.code
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");

        if self.has_properties() {
            xml.push_str("<w:rPr>");

            if let Some(ref font) = self.font_name {
                let font = escape_xml(font);
                write!(
                    xml,
                    "<w:rFonts w:ascii=\"{font}\" w:eastAsia=\"{font}\" w:hAnsi=\"{font}\"/>"
                )
                .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if let Some(size) = self.font_size {
                let sz = pt_to_half_points(size);
                write!(xml, "<w:sz w:val=\"{sz}\"/><w:szCs w:val=\"{sz}\"/>")
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if self.bold {
                xml.push_str("<w:b/>");
            }

            if self.italic {
                xml.push_str("<w:i/>");
            }

            if self.underline {
                xml.push_str("<w:u w:val=\"single\"/>");
            }

            if self.strike {
                xml.push_str("<w:strike/>");
            }

            if let Some(ref color) = self.color {
                let color = color.strip_prefix('#').unwrap_or(color);
                write!(xml, "<w:color w:val=\"{}\"/>", escape_xml(color))
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if self.code {
                xml.push_str("<w:rFonts w:ascii=\"Consolas\" w:hAnsi=\"Consolas\"/>");
                xml.push_str("<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"E8E8E8\"/>");
            }

            xml.push_str("</w:rPr>");
        }

        match &self.content {
            RunContent::Image {
                rel_id,
                width_emu,
                height_emu,
            } => {
                write_drawing(xml, rel_id, *width_emu, *height_emu)?;
            },
            RunContent::Text(text) if !text.is_empty() => {
                for (i, line) in text.split('\n').enumerate() {
                    if i > 0 {
                        xml.push_str("<w:br/>");
                    }
                    if needs_space_preserve(line) {
                        write!(xml, "<w:t xml:space=\"preserve\">{}</w:t>", escape_xml(line))
                            .map_err(|e| DocxError::Xml(e.to_string()))?;
                    } else {
                        write!(xml, "<w:t>{}</w:t>", escape_xml(line))
                            .map_err(|e| DocxError::Xml(e.to_string()))?;
                    }
                }
            },
            _ => {},
        }

        xml.push_str("</w:r>");
        Ok(())
    }
}

/// Whether a text line must carry `xml:space="preserve"`.
///
/// Required when consumers would otherwise collapse significant
/// whitespace: a leading or trailing space, or two consecutive spaces.
pub(crate) fn needs_space_preserve(line: &str) -> bool {
    line.starts_with(' ') || line.ends_with(' ') || line.contains("  ")
}

/// Emit the fixed inline-drawing structure for an image run.
fn write_drawing(xml: &mut String, rel_id: &str, width_emu: i64, height_emu: i64) -> Result<()> {
    write!(
        xml,
        concat!(
            "<w:drawing>",
            "<wp:inline distT=\"0\" distB=\"0\" distL=\"0\" distR=\"0\">",
            "<wp:extent cx=\"{cx}\" cy=\"{cy}\"/>",
            "<wp:effectExtent l=\"0\" t=\"0\" r=\"0\" b=\"0\"/>",
            "<wp:docPr id=\"1\" name=\"Picture\"/>",
            "<wp:cNvGraphicFramePr>",
            "<a:graphicFrameLocks xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" noChangeAspect=\"1\"/>",
            "</wp:cNvGraphicFramePr>",
            "<a:graphic xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\">",
            "<a:graphicData uri=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">",
            "<pic:pic xmlns:pic=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">",
            "<pic:nvPicPr><pic:cNvPr id=\"0\" name=\"Picture\"/><pic:cNvPicPr/></pic:nvPicPr>",
            "<pic:blipFill><a:blip r:embed=\"{rid}\"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>",
            "<pic:spPr>",
            "<a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>",
            "<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>",
            "</pic:spPr>",
            "</pic:pic>",
            "</a:graphicData>",
            "</a:graphic>",
            "</wp:inline>",
            "</w:drawing>",
        ),
        cx = width_emu,
        cy = height_emu,
        rid = escape_xml(rel_id)
    )
    .map_err(|e| DocxError::Xml(e.to_string()))
}

/// Common interface for elements that accept runs.
///
/// Both paragraphs and hyperlinks collect runs; renderers that produce
/// styled text can target either through this trait.
pub trait RunContainer {
    /// Append a plain text run.
    fn add_run(&mut self, text: &str) -> &mut Run;
    /// Append a text run with the common formatting flags pre-set.
    fn add_formatted_run(&mut self, text: &str, bold: bool, italic: bool, code: bool) -> &mut Run;
    /// Append an inline image run referencing a registered relationship.
    fn add_image_run(&mut self, rel_id: &str, width_emu: i64, height_emu: i64) -> &mut Run;
}

/// A hyperlink wrapping one or more runs.
///
/// Populate the runs first, then call [`Hyperlink::finalize_link_style`]
/// once: it underlines every run and applies the conventional link color
/// to runs that have no explicit color of their own.
#[derive(Debug, Clone)]
pub struct Hyperlink {
    rel_id: String,
    runs: Vec<Run>,
}

/// Default hyperlink text color (hex RGB).
const LINK_COLOR: &str = "0563C1";

impl Hyperlink {
    pub(crate) fn new(rel_id: &str) -> Self {
        Self {
            rel_id: rel_id.to_string(),
            runs: Vec::new(),
        }
    }

    /// Underline all runs and default the color of uncolored ones.
    pub fn finalize_link_style(&mut self) {
        for run in &mut self.runs {
            if run.color.is_none() {
                run.color = Some(LINK_COLOR.to_string());
            }
            run.underline = true;
        }
    }

    fn push_run(&mut self, run: Run) -> &mut Run {
        self.runs.push(run);
        match self.runs.last_mut() {
            Some(run) => run,
            None => unreachable!(),
        }
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(xml, "<w:hyperlink r:id=\"{}\">", escape_xml(&self.rel_id))
            .map_err(|e| DocxError::Xml(e.to_string()))?;
        for run in &self.runs {
            run.to_xml(xml)?;
        }
        xml.push_str("</w:hyperlink>");
        Ok(())
    }
}

impl RunContainer for Hyperlink {
    fn add_run(&mut self, text: &str) -> &mut Run {
        self.push_run(Run::text(text))
    }

    fn add_formatted_run(&mut self, text: &str, bold: bool, italic: bool, code: bool) -> &mut Run {
        let mut run = Run::text(text);
        run.bold = bold;
        run.italic = italic;
        run.code = code;
        self.push_run(run)
    }

    fn add_image_run(&mut self, rel_id: &str, width_emu: i64, height_emu: i64) -> &mut Run {
        self.push_run(Run::image(rel_id, width_emu, height_emu))
    }
}

/// Paragraph child element.
#[derive(Debug, Clone)]
pub enum ParagraphChild {
    Run(Run),
    Hyperlink(Hyperlink),
}

/// A paragraph: an ordered list of runs and hyperlinks plus block-level
/// formatting.
///
/// Lengths are in twips; zero means unset. `w:pPr` is only emitted when
/// a style or at least one attribute is set.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    style_id: Option<String>,
    children: Vec<ParagraphChild>,
    align: Option<Alignment>,
    indent: i64,
    first_line_indent: i64,
    space_before: i64,
    space_after: i64,
    line_height: i64,
    shading: Option<String>,
    boxed: bool,
    horizontal_rule: bool,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph bound to a named style (e.g., "Heading1").
    pub fn with_style(style_id: &str) -> Self {
        Self {
            style_id: Some(style_id.to_string()),
            ..Self::default()
        }
    }

    pub fn align(&mut self, align: Alignment) -> &mut Self {
        self.align = Some(align);
        self
    }

    /// Left indent in twips.
    pub fn indent(&mut self, twips: i64) -> &mut Self {
        self.indent = twips;
        self
    }

    /// First-line indent in twips.
    pub fn first_line_indent(&mut self, twips: i64) -> &mut Self {
        self.first_line_indent = twips;
        self
    }

    /// Space before the paragraph in twips.
    pub fn space_before(&mut self, twips: i64) -> &mut Self {
        self.space_before = twips;
        self
    }

    /// Space after the paragraph in twips.
    pub fn space_after(&mut self, twips: i64) -> &mut Self {
        self.space_after = twips;
        self
    }

    /// Line height in twips (defaults to 360 when spacing is emitted).
    pub fn line_height(&mut self, twips: i64) -> &mut Self {
        self.line_height = twips;
        self
    }

    /// Background shading as hex RGB; a leading `#` is stripped on output.
    pub fn shading(&mut self, color: &str) -> &mut Self {
        self.shading = Some(color.to_string());
        self
    }

    /// Draw a light box border around the paragraph.
    pub fn boxed(&mut self, boxed: bool) -> &mut Self {
        self.boxed = boxed;
        self
    }

    /// Render the paragraph as a horizontal rule (bottom border only).
    pub fn horizontal_rule(&mut self, rule: bool) -> &mut Self {
        self.horizontal_rule = rule;
        self
    }

    /// Append a hyperlink whose relationship id was obtained from
    /// `Document::add_hyperlink`.
    pub fn add_hyperlink(&mut self, rel_id: &str) -> &mut Hyperlink {
        self.children
            .push(ParagraphChild::Hyperlink(Hyperlink::new(rel_id)));
        match self.children.last_mut() {
            Some(ParagraphChild::Hyperlink(link)) => link,
            _ => unreachable!(),
        }
    }

    pub(crate) fn has_alignment(&self) -> bool {
        self.align.is_some()
    }

    pub(crate) fn set_alignment(&mut self, align: Alignment) {
        self.align = Some(align);
    }

    fn push_run(&mut self, run: Run) -> &mut Run {
        self.children.push(ParagraphChild::Run(run));
        match self.children.last_mut() {
            Some(ParagraphChild::Run(run)) => run,
            _ => unreachable!(),
        }
    }

    fn has_properties(&self) -> bool {
        self.style_id.is_some()
            || self.align.is_some()
            || self.indent > 0
            || self.first_line_indent > 0
            || self.space_before > 0
            || self.space_after > 0
            || self.line_height > 0
            || self.shading.is_some()
            || self.boxed
            || self.horizontal_rule
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:p>");

        if self.has_properties() {
            xml.push_str("<w:pPr>");

            if let Some(ref style_id) = self.style_id {
                write!(xml, "<w:pStyle w:val=\"{}\"/>", escape_xml(style_id))
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if let Some(align) = self.align {
                write!(xml, "<w:jc w:val=\"{}\"/>", align.as_str())
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if self.indent > 0 || self.first_line_indent > 0 {
                write!(
                    xml,
                    "<w:ind w:left=\"{}\" w:firstLine=\"{}\"/>",
                    self.indent, self.first_line_indent
                )
                .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if self.space_before > 0 || self.space_after > 0 || self.line_height > 0 {
                let line = if self.line_height > 0 {
                    self.line_height
                } else {
                    360
                };
                write!(
                    xml,
                    "<w:spacing w:before=\"{}\" w:after=\"{}\" w:line=\"{}\" w:lineRule=\"auto\"/>",
                    self.space_before, self.space_after, line
                )
                .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if let Some(ref shading) = self.shading {
                let fill = shading.strip_prefix('#').unwrap_or(shading);
                write!(
                    xml,
                    "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>",
                    escape_xml(fill)
                )
                .map_err(|e| DocxError::Xml(e.to_string()))?;
            }

            if self.horizontal_rule {
                xml.push_str(
                    "<w:pBdr><w:bottom w:val=\"single\" w:sz=\"6\" w:space=\"1\" w:color=\"A0A0A0\"/></w:pBdr>",
                );
            }

            // A paragraph flagged both as rule and as box emits both
            // border blocks; consumers resolve the conflict themselves.
            if self.boxed {
                xml.push_str(concat!(
                    "<w:pBdr>",
                    "<w:top w:val=\"single\" w:sz=\"4\" w:space=\"1\" w:color=\"C0C0C0\"/>",
                    "<w:left w:val=\"single\" w:sz=\"4\" w:space=\"4\" w:color=\"C0C0C0\"/>",
                    "<w:bottom w:val=\"single\" w:sz=\"4\" w:space=\"1\" w:color=\"C0C0C0\"/>",
                    "<w:right w:val=\"single\" w:sz=\"4\" w:space=\"4\" w:color=\"C0C0C0\"/>",
                    "</w:pBdr>",
                ));
            }

            xml.push_str("</w:pPr>");
        }

        for child in &self.children {
            match child {
                ParagraphChild::Run(run) => run.to_xml(xml)?,
                ParagraphChild::Hyperlink(link) => link.to_xml(xml)?,
            }
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}

impl RunContainer for Paragraph {
    fn add_run(&mut self, text: &str) -> &mut Run {
        self.push_run(Run::text(text))
    }

    fn add_formatted_run(&mut self, text: &str, bold: bool, italic: bool, code: bool) -> &mut Run {
        let mut run = Run::text(text);
        run.bold = bold;
        run.italic = italic;
        run.code = code;
        self.push_run(run)
    }

    fn add_image_run(&mut self, rel_id: &str, width_emu: i64, height_emu: i64) -> &mut Run {
        self.push_run(Run::image(rel_id, width_emu, height_emu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_paragraph(p: &Paragraph) -> String {
        let mut xml = String::new();
        p.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_plain_run() {
        let mut p = Paragraph::new();
        p.add_run("hello");
        let xml = render_paragraph(&p);
        assert_eq!(xml, "<w:p><w:r><w:t>hello</w:t></w:r></w:p>");
    }

    #[test]
    fn test_space_preserve_marker() {
        assert!(needs_space_preserve(" leading"));
        assert!(needs_space_preserve("trailing "));
        assert!(needs_space_preserve("two  inside"));
        assert!(!needs_space_preserve("single spaces only"));
        assert!(!needs_space_preserve(""));

        let mut p = Paragraph::new();
        p.add_run(" padded ");
        let xml = render_paragraph(&p);
        assert!(xml.contains("<w:t xml:space=\"preserve\"> padded </w:t>"));

        let mut p = Paragraph::new();
        p.add_run("no marker here");
        let xml = render_paragraph(&p);
        assert!(xml.contains("<w:t>no marker here</w:t>"));
        assert!(!xml.contains("preserve"));
    }

    #[test]
    fn test_newline_splits_into_break() {
        let mut p = Paragraph::new();
        p.add_run("first\nsecond");
        let xml = render_paragraph(&p);
        assert_eq!(xml.matches("<w:t>").count(), 2);
        assert_eq!(xml.matches("<w:br/>").count(), 1);
        let br = xml.find("<w:br/>").unwrap();
        assert!(xml.find("first").unwrap() < br);
        assert!(br < xml.find("second").unwrap());
    }

    #[test]
    fn test_text_is_escaped() {
        let mut p = Paragraph::new();
        p.add_run("a < b & \"c\"");
        let xml = render_paragraph(&p);
        assert!(xml.contains("a &lt; b &amp; &quot;c&quot;"));
    }

    #[test]
    fn test_run_properties_order_and_gating() {
        let mut p = Paragraph::new();
        p.add_run("x")
            .font_name("Arial")
            .font_size(10.5)
            .bold(true)
            .color("#FF0000");
        let xml = render_paragraph(&p);

        assert!(xml.contains("<w:rPr>"));
        assert!(xml.contains("<w:rFonts w:ascii=\"Arial\" w:eastAsia=\"Arial\" w:hAnsi=\"Arial\"/>"));
        assert!(xml.contains("<w:sz w:val=\"21\"/><w:szCs w:val=\"21\"/>"));
        assert!(xml.contains("<w:b/>"));
        // Leading '#' stripped from colors
        assert!(xml.contains("<w:color w:val=\"FF0000\"/>"));
        // Properties precede content
        assert!(xml.find("</w:rPr>").unwrap() < xml.find("<w:t>").unwrap());
    }

    #[test]
    fn test_code_run_extras() {
        let mut p = Paragraph::new();
        p.add_formatted_run("let x = 1;", false, false, true);
        let xml = render_paragraph(&p);
        assert!(xml.contains("<w:rFonts w:ascii=\"Consolas\" w:hAnsi=\"Consolas\"/>"));
        assert!(xml.contains("<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"E8E8E8\"/>"));
    }

    #[test]
    fn test_empty_run_emits_no_text() {
        let mut p = Paragraph::new();
        p.add_run("").bold(true);
        let xml = render_paragraph(&p);
        assert!(xml.contains("<w:r><w:rPr><w:b/></w:rPr></w:r>"));
        assert!(!xml.contains("<w:t"));
    }

    #[test]
    fn test_alignment_tokens() {
        for (align, token) in [
            (Alignment::Left, "start"),
            (Alignment::Right, "end"),
            (Alignment::Center, "center"),
            (Alignment::Justify, "justify"),
        ] {
            let mut p = Paragraph::new();
            p.align(align);
            let xml = render_paragraph(&p);
            assert!(xml.contains(&format!("<w:jc w:val=\"{token}\"/>")), "{token}");
        }
    }

    #[test]
    fn test_paragraph_properties() {
        let mut p = Paragraph::with_style("Heading1");
        p.indent(360)
            .first_line_indent(210)
            .space_before(120)
            .space_after(240)
            .shading("#F0F0F0");
        let xml = render_paragraph(&p);
        assert!(xml.contains("<w:pStyle w:val=\"Heading1\"/>"));
        assert!(xml.contains("<w:ind w:left=\"360\" w:firstLine=\"210\"/>"));
        assert!(xml.contains(
            "<w:spacing w:before=\"120\" w:after=\"240\" w:line=\"360\" w:lineRule=\"auto\"/>"
        ));
        assert!(xml.contains("<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"F0F0F0\"/>"));
    }

    #[test]
    fn test_line_height_overrides_default() {
        let mut p = Paragraph::new();
        p.space_after(120).line_height(480);
        let xml = render_paragraph(&p);
        assert!(xml.contains("w:line=\"480\""));
    }

    #[test]
    fn test_no_ppr_without_properties() {
        let mut p = Paragraph::new();
        p.add_run("bare");
        assert!(!render_paragraph(&p).contains("<w:pPr>"));
    }

    #[test]
    fn test_border_modes() {
        let mut p = Paragraph::new();
        p.horizontal_rule(true);
        let xml = render_paragraph(&p);
        assert!(xml.contains("<w:bottom w:val=\"single\" w:sz=\"6\" w:space=\"1\" w:color=\"A0A0A0\"/>"));

        let mut p = Paragraph::new();
        p.boxed(true);
        let xml = render_paragraph(&p);
        assert!(xml.contains("w:color=\"C0C0C0\""));
        assert_eq!(xml.matches("<w:pBdr>").count(), 1);

        // Both flags emit both blocks
        let mut p = Paragraph::new();
        p.horizontal_rule(true).boxed(true);
        let xml = render_paragraph(&p);
        assert_eq!(xml.matches("<w:pBdr>").count(), 2);
    }

    #[test]
    fn test_image_run_drawing() {
        let mut p = Paragraph::new();
        p.add_image_run("rId11", 914_400, 457_200);
        let xml = render_paragraph(&p);
        assert!(xml.contains("<wp:extent cx=\"914400\" cy=\"457200\"/>"));
        assert!(xml.contains("<a:blip r:embed=\"rId11\"/>"));
        assert!(xml.contains("<a:ext cx=\"914400\" cy=\"457200\"/>"));
    }

    #[test]
    fn test_hyperlink_wraps_runs() {
        let mut p = Paragraph::new();
        let link = p.add_hyperlink("rId1001");
        link.add_run("click");
        let xml = render_paragraph(&p);
        assert!(xml.contains("<w:hyperlink r:id=\"rId1001\"><w:r>"));
        assert!(xml.contains("</w:r></w:hyperlink>"));
    }

    #[test]
    fn test_finalize_link_style_defaults() {
        let mut link = Hyperlink::new("rId1001");
        link.add_run("plain");
        link.add_run("colored").color("FF0000");
        link.finalize_link_style();

        let mut xml = String::new();
        link.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<w:color w:val=\"0563C1\"/>"));
        // The explicitly colored run keeps its color but is still underlined
        assert!(xml.contains("<w:color w:val=\"FF0000\"/>"));
        assert_eq!(xml.matches("<w:u w:val=\"single\"/>").count(), 2);
    }

    #[test]
    fn test_finalize_underlines_colored_runs() {
        let mut link = Hyperlink::new("rId1001");
        link.add_run("custom").color("FF0000");
        link.finalize_link_style();

        let mut xml = String::new();
        link.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<w:u w:val=\"single\"/>"));
        assert!(!xml.contains("0563C1"));
    }

    #[test]
    fn test_mixed_children_preserve_order() {
        let mut p = Paragraph::new();
        p.add_run("before ");
        p.add_hyperlink("rId1001").add_run("link");
        p.add_run(" after");
        let xml = render_paragraph(&p);
        let before = xml.find("before").unwrap();
        let link = xml.find("<w:hyperlink").unwrap();
        let after = xml.find(" after").unwrap();
        assert!(before < link && link < after);
    }

    proptest::proptest! {
        #[test]
        fn prop_preserve_marker_matches_whitespace(text in "[ a-z]{0,12}") {
            let mut p = Paragraph::new();
            p.add_run(&text);
            let xml = render_paragraph(&p);
            let expected = needs_space_preserve(&text) && !text.is_empty();
            proptest::prop_assert_eq!(xml.contains("xml:space=\"preserve\""), expected);
        }
    }
}
