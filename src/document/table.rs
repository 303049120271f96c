//! Table types and their WordprocessingML encoder.
use crate::document::paragraph::{Alignment, Paragraph};
use crate::error::{DocxError, Result};
use crate::opc::escape_xml;
use std::fmt::Write as FmtWrite;

/// Vertical alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

impl VAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

/// A table cell holding zero or more paragraphs.
///
/// An empty cell still serializes one empty paragraph, which the schema
/// requires. Cell-level horizontal alignment is copied onto paragraphs
/// when they are attached, unless a paragraph brings its own alignment.
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    paragraphs: Vec<Paragraph>,
    width: i64,
    align: Option<Alignment>,
    valign: Option<VAlign>,
    shading: Option<String>,
}

impl TableCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell width in twips (dxa). Zero leaves the width to the layout.
    pub fn width(&mut self, twips: i64) -> &mut Self {
        self.width = twips;
        self
    }

    /// Horizontal alignment applied to subsequently attached paragraphs.
    pub fn align(&mut self, align: Alignment) -> &mut Self {
        self.align = Some(align);
        self
    }

    pub fn valign(&mut self, valign: VAlign) -> &mut Self {
        self.valign = Some(valign);
        self
    }

    /// Background shading as hex RGB.
    pub fn shading(&mut self, color: &str) -> &mut Self {
        self.shading = Some(color.to_string());
        self
    }

    /// Attach a paragraph to the cell.
    ///
    /// If the cell has an alignment and the paragraph does not, the
    /// paragraph takes the cell's alignment now. Paragraphs attached
    /// before the cell alignment was set are not restyled.
    pub fn add_paragraph(&mut self, mut paragraph: Paragraph) {
        if let Some(align) = self.align
            && !paragraph.has_alignment()
        {
            paragraph.set_alignment(align);
        }
        self.paragraphs.push(paragraph);
    }

    /// Convenience: attach one paragraph containing a single run.
    pub fn set_text(&mut self, text: &str, bold: bool) {
        use crate::document::paragraph::RunContainer;
        let mut p = Paragraph::new();
        p.add_run(text).bold(bold);
        self.add_paragraph(p);
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tc><w:tcPr>");

        if self.width > 0 {
            write!(xml, "<w:tcW w:w=\"{}\" w:type=\"dxa\"/>", self.width)
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

        if let Some(valign) = self.valign {
            write!(xml, "<w:vAlign w:val=\"{}\"/>", valign.as_str())
                .map_err(|e| DocxError::Xml(e.to_string()))?;
        }

        xml.push_str("</w:tcPr>");

        if self.paragraphs.is_empty() {
            // The consumer schema rejects cells without a paragraph
            xml.push_str("<w:p/>");
        } else {
            for p in &self.paragraphs {
                p.to_xml(xml)?;
            }
        }

        xml.push_str("</w:tc>");
        Ok(())
    }
}

/// A table row.
#[derive(Debug, Clone, Default)]
pub struct TableRow {
    cells: Vec<TableCell>,
    header: bool,
}

impl TableRow {
    /// Append a new cell and return it for configuration.
    pub fn add_cell(&mut self) -> &mut TableCell {
        self.cells.push(TableCell::new());
        match self.cells.last_mut() {
            Some(cell) => cell,
            None => unreachable!(),
        }
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tr>");
        if self.header {
            xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
        }
        for cell in &self.cells {
            cell.to_xml(xml)?;
        }
        xml.push_str("</w:tr>");
        Ok(())
    }
}

/// A table: rows of cells plus optional column widths and borders.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<TableRow>,
    col_widths: Vec<i64>,
    borders: bool,
}

impl Table {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            col_widths: Vec::new(),
            borders: true,
        }
    }

    /// Set explicit column widths in twips, one per column.
    pub fn col_widths(&mut self, widths: Vec<i64>) -> &mut Self {
        self.col_widths = widths;
        self
    }

    pub fn borders(&mut self, borders: bool) -> &mut Self {
        self.borders = borders;
        self
    }

    /// Append a row; header rows repeat on page breaks.
    pub fn add_row(&mut self, header: bool) -> &mut TableRow {
        self.rows.push(TableRow {
            cells: Vec::new(),
            header,
        });
        match self.rows.last_mut() {
            Some(row) => row,
            None => unreachable!(),
        }
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str(concat!(
            "<w:tbl>",
            "<w:tblPr>",
            "<w:tblStyle w:val=\"TableGrid\"/>",
            "<w:tblW w:w=\"0\" w:type=\"auto\"/>",
            "<w:tblLook w:val=\"04A0\" w:firstRow=\"1\" w:lastRow=\"0\" w:firstColumn=\"1\" w:lastColumn=\"0\" w:noHBand=\"0\" w:noVBand=\"1\"/>",
        ));

        if self.borders {
            xml.push_str(concat!(
                "<w:tblBorders>",
                "<w:top w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
                "<w:left w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
                "<w:bottom w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
                "<w:right w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
                "<w:insideH w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
                "<w:insideV w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>",
                "</w:tblBorders>",
            ));
        }

        xml.push_str("</w:tblPr>");

        if !self.col_widths.is_empty() {
            xml.push_str("<w:tblGrid>");
            for width in &self.col_widths {
                write!(xml, "<w:gridCol w:w=\"{}\"/>", width)
                    .map_err(|e| DocxError::Xml(e.to_string()))?;
            }
            xml.push_str("</w:tblGrid>");
        }

        for row in &self.rows {
            row.to_xml(xml)?;
        }

        xml.push_str("</w:tbl>");
        Ok(())
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
