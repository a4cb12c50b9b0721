//! Xlsx package writer
//!
//! Serializes an assembled sheet plus its style and shared-string
//! registries into the zip container an xlsx document really is. Every
//! run starts from fresh registries, so two runs over the same table
//! produce the same part contents.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use log::debug;
use tabreel_core::{column_letters, TabularSheet};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::XlsxResult;
use crate::registry::SharedStringRegistry;
use crate::sheet::{Sheet, SheetBuilder, SheetRow};
use crate::stylesheet::{escape_xml_attr, StylesheetBuilder};

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Writes a [`TabularSheet`] as a single-worksheet xlsx document
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write the document to a file path
    pub fn write_file<T, P: AsRef<Path>>(table: &TabularSheet<T>, path: P) -> XlsxResult<()> {
        let file = BufWriter::new(File::create(path)?);
        Self::write(table, file)
    }

    /// Write the document to any seekable sink
    pub fn write<T, W: Write + Seek>(table: &TabularSheet<T>, writer: W) -> XlsxResult<()> {
        let mut styles = StylesheetBuilder::new();
        let mut strings = SharedStringRegistry::new();
        let sheet = SheetBuilder::new(table, &mut styles, &mut strings).build()?;

        debug!(
            "writing workbook '{}': {} rows, {} shared strings",
            table.title(),
            sheet.rows.len() + 1,
            strings.len()
        );

        let mut zip = ZipWriter::new(writer);
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(content_types_xml().as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        zip.write_all(root_rels_xml().as_bytes())?;

        zip.start_file("xl/workbook.xml", options)?;
        zip.write_all(workbook_xml(table.title()).as_bytes())?;

        zip.start_file("xl/_rels/workbook.xml.rels", options)?;
        zip.write_all(workbook_rels_xml().as_bytes())?;

        zip.start_file("xl/styles.xml", options)?;
        zip.write_all(styles.to_styles_xml().as_bytes())?;

        zip.start_file("xl/sharedStrings.xml", options)?;
        zip.write_all(shared_strings_xml(&strings).as_bytes())?;

        zip.start_file("xl/worksheets/sheet1.xml", options)?;
        zip.write_all(worksheet_xml(&sheet).as_bytes())?;

        zip.finish()?;
        Ok(())
    }
}

fn content_types_xml() -> String {
    format!(
        r#"{}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
  <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
  <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
  <Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>
</Types>"#,
        XML_DECL
    )
}

fn root_rels_xml() -> String {
    format!(
        r#"{}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#,
        XML_DECL
    )
}

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        r#"{}
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>
    <sheet name="{}" sheetId="1" r:id="rId1"/>
  </sheets>
</workbook>"#,
        XML_DECL,
        escape_xml_attr(sheet_name)
    )
}

fn workbook_rels_xml() -> String {
    format!(
        r#"{}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>
</Relationships>"#,
        XML_DECL
    )
}

fn shared_strings_xml(strings: &SharedStringRegistry) -> String {
    let mut xml = format!(
        "{}\n<sst xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" count=\"{}\" uniqueCount=\"{}\">",
        XML_DECL,
        strings.reference_count(),
        strings.len()
    );
    for s in strings.strings() {
        xml.push_str(&format!("\n  <si><t>{}</t></si>", escape_xml_text(s)));
    }
    xml.push_str("\n</sst>");
    xml
}

fn worksheet_xml(sheet: &Sheet) -> String {
    let last_row = sheet.rows.last().map(|r| r.index).unwrap_or(1);
    let last_col = column_letters(sheet.column_count.max(1));

    let mut xml = format!(
        "{}\n<worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\n  <dimension ref=\"A1:{}{}\"/>",
        XML_DECL, last_col, last_row
    );

    // One sized column entry per table column, so viewers auto-fit titles
    xml.push_str("\n  <cols>");
    for i in 0..sheet.column_count {
        xml.push_str(&format!(
            "\n    <col min=\"{0}\" max=\"{0}\" bestFit=\"1\"/>",
            i + 1
        ));
    }
    xml.push_str("\n  </cols>");

    xml.push_str("\n  <sheetData>");
    write_row(&mut xml, &sheet.header);
    for row in &sheet.rows {
        write_row(&mut xml, row);
    }
    xml.push_str("\n  </sheetData>");

    xml.push_str("\n</worksheet>");
    xml
}

fn write_row(xml: &mut String, row: &SheetRow) {
    xml.push_str(&format!("\n    <row r=\"{}\">", row.index));
    for cell in &row.cells {
        let style_attr = cell
            .style_index
            .map(|s| format!(" s=\"{}\"", s))
            .unwrap_or_default();
        match (&cell.kind, &cell.literal) {
            (Some(kind), Some(literal)) => {
                let type_attr = kind
                    .type_attr()
                    .map(|t| format!(" t=\"{}\"", t))
                    .unwrap_or_default();
                xml.push_str(&format!(
                    "\n      <c r=\"{}\"{}{}><v>{}</v></c>",
                    cell.reference, style_attr, type_attr, literal
                ));
            }
            // Empty cell: address slot only
            _ => {
                xml.push_str(&format!("\n      <c r=\"{}\"{}/>", cell.reference, style_attr));
            }
        }
    }
    xml.push_str("\n    </row>");
}

fn escape_xml_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::CellDataKind;
    use crate::sheet::SheetCell;
    use pretty_assertions::assert_eq;

    fn cell(reference: &str, literal: Option<&str>, style: Option<u32>) -> SheetCell {
        SheetCell {
            reference: reference.to_string(),
            kind: literal.map(|_| CellDataKind::Number),
            literal: literal.map(str::to_string),
            style_index: style,
        }
    }

    #[test]
    fn test_write_row_renders_values_and_gaps() {
        let row = SheetRow {
            index: 3,
            cells: vec![
                cell("A3", Some("42"), Some(1)),
                cell("B3", None, None),
                cell("C3", Some("7"), None),
            ],
        };

        let mut xml = String::new();
        write_row(&mut xml, &row);

        assert!(xml.contains(r#"<row r="3">"#));
        assert!(xml.contains(r#"<c r="A3" s="1"><v>42</v></c>"#));
        assert!(xml.contains(r#"<c r="B3"/>"#));
        assert!(xml.contains(r#"<c r="C3"><v>7</v></c>"#));
    }

    #[test]
    fn test_write_row_type_attrs() {
        let row = SheetRow {
            index: 1,
            cells: vec![
                SheetCell {
                    reference: "A1".into(),
                    kind: Some(CellDataKind::SharedString),
                    literal: Some("0".into()),
                    style_index: None,
                },
                SheetCell {
                    reference: "B1".into(),
                    kind: Some(CellDataKind::Boolean),
                    literal: Some("1".into()),
                    style_index: None,
                },
            ],
        };

        let mut xml = String::new();
        write_row(&mut xml, &row);

        assert!(xml.contains(r#"<c r="A1" t="s"><v>0</v></c>"#));
        assert!(xml.contains(r#"<c r="B1" t="b"><v>1</v></c>"#));
    }

    #[test]
    fn test_workbook_xml_escapes_sheet_name() {
        let xml = workbook_xml("P&L \"2023\"");
        assert!(xml.contains(r#"name="P&amp;L &quot;2023&quot;""#));
    }

    #[test]
    fn test_shared_strings_counts() {
        let mut strings = SharedStringRegistry::new();
        strings.register("a");
        strings.register("b");
        strings.register("a");

        let xml = shared_strings_xml(&strings);
        assert!(xml.contains(r#"count="3" uniqueCount="2""#));
        assert!(xml.contains("<si><t>a</t></si>"));
    }

    #[test]
    fn test_shared_strings_escapes_text() {
        let mut strings = SharedStringRegistry::new();
        strings.register("a < b & c");

        let xml = shared_strings_xml(&strings);
        assert!(xml.contains("<si><t>a &lt; b &amp; c</t></si>"));
    }

    #[test]
    fn test_worksheet_dimension() {
        let sheet = Sheet {
            header: SheetRow {
                index: 1,
                cells: vec![cell("A1", Some("0"), None)],
            },
            rows: vec![SheetRow {
                index: 2,
                cells: vec![cell("A2", Some("1"), None)],
            }],
            column_count: 1,
        };

        let xml = worksheet_xml(&sheet);
        assert!(xml.contains(r#"<dimension ref="A1:A2"/>"#));
        assert_eq!(xml.matches("<row ").count(), 2);
    }
}
