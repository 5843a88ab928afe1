//! Exam output generation.
//!
//! This crate renders a shuffled exam in two formats sharing one layout
//! pass (numbered items, lettered options):
//!
//! - **Plain text**: tab-indented option lines, one blank line per item
//! - **DOCX**: styled list paragraphs with hanging indents, optional
//!   template styles, configurable font
//!
//! and writes the answer key as a headerless XLSX workbook.

mod common;
mod docx;
mod layout;
mod text;
mod xlsx;

pub use common::{ensure_parent_dir, versioned_base, with_suffix};
pub use docx::{
    DEFAULT_FONT, DocumentExamPaths, DocumentOptions, write_document_exam,
};
pub use layout::{ItemLayout, OptionLayout, layout_exam};
pub use text::{TextExamPaths, render_text, write_text_exam, write_text_exam_version};
pub use xlsx::write_answer_key;
