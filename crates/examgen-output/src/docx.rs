//! DOCX exam rendering.
//!
//! The exam document is written as a WordprocessingML package: numbered-list
//! question paragraphs and lettered option paragraphs with hanging indents,
//! a configurable font on every run, and one empty paragraph after each
//! item. A template `.docx` can supply the style and numbering parts;
//! without one a minimal built-in style set is used.

use std::fs::File;
use std::io::{BufWriter, Read, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use zip::ZipWriter;
use zip::result::ZipError;

use examgen_model::{AnswerKey, ItemBank};

use crate::common::{ensure_parent_dir, versioned_base, with_suffix, write_part};
use crate::layout::layout_exam;
use crate::xlsx::write_answer_key;

/// Font applied when the caller does not pick one.
pub const DEFAULT_FONT: &str = "Lato";

const WORDPROCESSING_NS: &str =
    "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const QUESTION_INDENT_MM: f64 = 7.5;
const OPTION_INDENT_MM: f64 = 12.0;
const OPTION_HANGING_MM: f64 = 4.0;

const TWIPS_PER_MM: f64 = 1440.0 / 25.4;

fn mm_to_twips(mm: f64) -> i64 {
    (mm * TWIPS_PER_MM).round() as i64
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/><Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/></Relationships>"#;

const APP_PROPERTIES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"><Application>examgen</Application></Properties>"#;

/// Default style set: a numbered question style and a plain option style.
const DEFAULT_STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style><w:style w:type="paragraph" w:styleId="ListNumber"><w:name w:val="List Number"/><w:basedOn w:val="Normal"/><w:pPr><w:numPr><w:numId w:val="1"/></w:numPr></w:pPr></w:style><w:style w:type="paragraph" w:styleId="List"><w:name w:val="List"/><w:basedOn w:val="Normal"/></w:style></w:styles>"#;

const DEFAULT_NUMBERING: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:abstractNum w:abstractNumId="0"><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/><w:lvlJc w:val="left"/></w:lvl></w:abstractNum><w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num></w:numbering>"#;

/// Options for DOCX output.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    /// Font family applied to every run.
    pub font: String,
    /// Template `.docx` supplying style definitions; `None` uses the
    /// built-in minimal styles.
    pub template: Option<PathBuf>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            template: None,
        }
    }
}

impl DocumentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// Paths produced by [`write_document_exam`].
#[derive(Debug, Clone)]
pub struct DocumentExamPaths {
    pub document: PathBuf,
    pub answer_key: PathBuf,
}

/// Style and numbering parts pulled out of a template package.
struct TemplateParts {
    styles: Option<Vec<u8>>,
    numbering: Option<Vec<u8>>,
}

impl TemplateParts {
    fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("open template {}", path.display()))?;
        let mut archive = zip::ZipArchive::new(file)
            .with_context(|| format!("read template {}", path.display()))?;
        Ok(Self {
            styles: read_optional_part(&mut archive, "word/styles.xml")?,
            numbering: read_optional_part(&mut archive, "word/numbering.xml")?,
        })
    }
}

fn read_optional_part(
    archive: &mut zip::ZipArchive<File>,
    name: &str,
) -> Result<Option<Vec<u8>>> {
    match archive.by_name(name) {
        Ok(mut part) => {
            let mut contents = Vec::new();
            part.read_to_end(&mut contents)
                .with_context(|| format!("read template part {name}"))?;
            Ok(Some(contents))
        }
        Err(ZipError::FileNotFound) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("read template part {name}")),
    }
}

/// Write the exam as `<base><version>.docx` and the answer key as
/// `<base><version>.xlsx`.
pub fn write_document_exam(
    exam: &ItemBank,
    answers: &AnswerKey,
    output_base: &Path,
    version: u32,
    options: &DocumentOptions,
) -> Result<DocumentExamPaths> {
    let base = versioned_base(output_base, version);
    let document_path = with_suffix(&base, ".docx");
    let key_path = with_suffix(&base, ".xlsx");

    write_docx(exam, &document_path, options)?;
    write_answer_key(answers, &key_path)?;

    tracing::debug!(
        document = %document_path.display(),
        answer_key = %key_path.display(),
        version,
        "wrote document exam"
    );

    Ok(DocumentExamPaths {
        document: document_path,
        answer_key: key_path,
    })
}

fn write_docx(exam: &ItemBank, output_path: &Path, options: &DocumentOptions) -> Result<()> {
    let template = options
        .template
        .as_deref()
        .map(TemplateParts::load)
        .transpose()?;
    let (styles, numbering) = match template {
        Some(parts) => (parts.styles, parts.numbering),
        None => (None, None),
    };

    ensure_parent_dir(output_path)?;
    let file = File::create(output_path)
        .with_context(|| format!("create {}", output_path.display()))?;
    let mut archive = ZipWriter::new(BufWriter::new(file));

    write_part(&mut archive, "[Content_Types].xml", CONTENT_TYPES.as_bytes())?;
    write_part(&mut archive, "_rels/.rels", PACKAGE_RELS.as_bytes())?;
    write_part(&mut archive, "docProps/core.xml", &core_properties_xml()?)?;
    write_part(&mut archive, "docProps/app.xml", APP_PROPERTIES.as_bytes())?;
    write_part(&mut archive, "word/_rels/document.xml.rels", DOCUMENT_RELS.as_bytes())?;
    write_part(
        &mut archive,
        "word/styles.xml",
        styles.as_deref().unwrap_or(DEFAULT_STYLES.as_bytes()),
    )?;
    write_part(
        &mut archive,
        "word/numbering.xml",
        numbering.as_deref().unwrap_or(DEFAULT_NUMBERING.as_bytes()),
    )?;
    write_part(&mut archive, "word/document.xml", &document_xml(exam, &options.font)?)?;

    archive
        .finish()
        .with_context(|| format!("finish {}", output_path.display()))?;
    Ok(())
}

fn core_properties_xml() -> Result<Vec<u8>> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut contents = Vec::new();
    write!(
        contents,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dcterms:created xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:modified></cp:coreProperties>"#
    )?;
    Ok(contents)
}

fn document_xml(exam: &ItemBank, font: &str) -> Result<Vec<u8>> {
    let mut xml = Writer::new(Vec::new());
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut root = BytesStart::new("w:document");
    root.push_attribute(("xmlns:w", WORDPROCESSING_NS));
    xml.write_event(Event::Start(root))?;
    xml.write_event(Event::Start(BytesStart::new("w:body")))?;

    let question_indent = mm_to_twips(QUESTION_INDENT_MM);
    let option_indent = mm_to_twips(OPTION_INDENT_MM);
    let option_hanging = mm_to_twips(OPTION_HANGING_MM);

    for item in layout_exam(exam) {
        write_paragraph(
            &mut xml,
            "ListNumber",
            question_indent,
            question_indent,
            font,
            item.question,
        )?;
        for option in &item.options {
            write_paragraph(
                &mut xml,
                "List",
                option_indent,
                option_hanging,
                font,
                &option.label(),
            )?;
        }
        xml.write_event(Event::Empty(BytesStart::new("w:p")))?;
    }

    xml.write_event(Event::Start(BytesStart::new("w:sectPr")))?;
    let mut page_size = BytesStart::new("w:pgSz");
    page_size.push_attribute(("w:w", "11906"));
    page_size.push_attribute(("w:h", "16838"));
    xml.write_event(Event::Empty(page_size))?;
    xml.write_event(Event::End(BytesEnd::new("w:sectPr")))?;

    xml.write_event(Event::End(BytesEnd::new("w:body")))?;
    xml.write_event(Event::End(BytesEnd::new("w:document")))?;
    Ok(xml.into_inner())
}

/// One styled list paragraph: hanging indent so wrapped lines align under
/// the marker, font on the run.
fn write_paragraph<W: std::io::Write>(
    xml: &mut Writer<W>,
    style: &str,
    indent_left: i64,
    indent_hanging: i64,
    font: &str,
    text: &str,
) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("w:p")))?;
    xml.write_event(Event::Start(BytesStart::new("w:pPr")))?;

    let mut paragraph_style = BytesStart::new("w:pStyle");
    paragraph_style.push_attribute(("w:val", style));
    xml.write_event(Event::Empty(paragraph_style))?;

    let left = indent_left.to_string();
    let hanging = indent_hanging.to_string();
    let mut indent = BytesStart::new("w:ind");
    indent.push_attribute(("w:left", left.as_str()));
    indent.push_attribute(("w:hanging", hanging.as_str()));
    xml.write_event(Event::Empty(indent))?;

    xml.write_event(Event::End(BytesEnd::new("w:pPr")))?;

    xml.write_event(Event::Start(BytesStart::new("w:r")))?;
    xml.write_event(Event::Start(BytesStart::new("w:rPr")))?;
    let mut fonts = BytesStart::new("w:rFonts");
    fonts.push_attribute(("w:ascii", font));
    fonts.push_attribute(("w:hAnsi", font));
    xml.write_event(Event::Empty(fonts))?;
    xml.write_event(Event::End(BytesEnd::new("w:rPr")))?;

    let mut run_text = BytesStart::new("w:t");
    run_text.push_attribute(("xml:space", "preserve"));
    xml.write_event(Event::Start(run_text))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new("w:t")))?;
    xml.write_event(Event::End(BytesEnd::new("w:r")))?;
    xml.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}
