//! Answer-key spreadsheet output.
//!
//! The key is a minimal SpreadsheetML package: one worksheet, no header,
//! no row index, one inline-string letter per row.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use zip::ZipWriter;

use examgen_model::AnswerKey;

use crate::common::{ensure_parent_dir, write_part};

const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

/// Write the answer key as an XLSX workbook.
pub fn write_answer_key(answers: &AnswerKey, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;
    let file = File::create(output_path)
        .with_context(|| format!("create {}", output_path.display()))?;
    let mut archive = ZipWriter::new(BufWriter::new(file));

    write_part(&mut archive, "[Content_Types].xml", CONTENT_TYPES.as_bytes())?;
    write_part(&mut archive, "_rels/.rels", PACKAGE_RELS.as_bytes())?;
    write_part(&mut archive, "xl/workbook.xml", WORKBOOK.as_bytes())?;
    write_part(
        &mut archive,
        "xl/_rels/workbook.xml.rels",
        WORKBOOK_RELS.as_bytes(),
    )?;
    write_part(&mut archive, "xl/worksheets/sheet1.xml", &sheet_xml(answers)?)?;

    archive
        .finish()
        .with_context(|| format!("finish {}", output_path.display()))?;

    tracing::debug!(path = %output_path.display(), rows = answers.len(), "wrote answer key");
    Ok(())
}

fn sheet_xml(answers: &AnswerKey) -> Result<Vec<u8>> {
    let mut xml = Writer::new(Vec::new());
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut root = BytesStart::new("worksheet");
    root.push_attribute(("xmlns", SPREADSHEET_NS));
    xml.write_event(Event::Start(root))?;
    xml.write_event(Event::Start(BytesStart::new("sheetData")))?;

    for (idx, letter) in answers.letters().iter().enumerate() {
        let row_ref = (idx + 1).to_string();
        let mut row = BytesStart::new("row");
        row.push_attribute(("r", row_ref.as_str()));
        xml.write_event(Event::Start(row))?;

        let cell_ref = format!("A{row_ref}");
        let mut cell = BytesStart::new("c");
        cell.push_attribute(("r", cell_ref.as_str()));
        cell.push_attribute(("t", "inlineStr"));
        xml.write_event(Event::Start(cell))?;
        xml.write_event(Event::Start(BytesStart::new("is")))?;
        xml.write_event(Event::Start(BytesStart::new("t")))?;
        let text = letter.to_string();
        xml.write_event(Event::Text(BytesText::new(&text)))?;
        xml.write_event(Event::End(BytesEnd::new("t")))?;
        xml.write_event(Event::End(BytesEnd::new("is")))?;
        xml.write_event(Event::End(BytesEnd::new("c")))?;
        xml.write_event(Event::End(BytesEnd::new("row")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("sheetData")))?;
    xml.write_event(Event::End(BytesEnd::new("worksheet")))?;
    Ok(xml.into_inner())
}
