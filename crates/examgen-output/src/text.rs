//! Plain-text exam rendering.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use examgen_model::{AnswerKey, ItemBank};

use crate::common::{ensure_parent_dir, versioned_base, with_suffix};
use crate::layout::layout_exam;
use crate::xlsx::write_answer_key;

/// Paths produced by [`write_text_exam`].
#[derive(Debug, Clone)]
pub struct TextExamPaths {
    pub exam: PathBuf,
    pub answer_key: PathBuf,
}

/// Render the exam body as plain text.
///
/// Each item is `"<n>. <question>"` followed by one tab-indented
/// `"<letter>) <option>."` line per option, with a blank line after every
/// item. No header, footer, or pagination.
pub fn render_text(exam: &ItemBank) -> String {
    let mut out = String::new();
    for item in layout_exam(exam) {
        out.push_str(&format!("{}. {}\n", item.number, item.question));
        for option in &item.options {
            out.push_str(&format!("\t{}\n", option.label()));
        }
        out.push('\n');
    }
    out
}

/// Write the exam as `<base>.txt` and the answer key as `<base>.xlsx`.
pub fn write_text_exam(
    exam: &ItemBank,
    answers: &AnswerKey,
    output_base: &Path,
) -> Result<TextExamPaths> {
    write_text_exam_version(exam, answers, output_base, None)
}

/// Like [`write_text_exam`], with a version suffix on both file names.
pub fn write_text_exam_version(
    exam: &ItemBank,
    answers: &AnswerKey,
    output_base: &Path,
    version: Option<u32>,
) -> Result<TextExamPaths> {
    let base = match version {
        Some(version) => versioned_base(output_base, version),
        None => output_base.to_path_buf(),
    };
    let exam_path = with_suffix(&base, ".txt");
    let key_path = with_suffix(&base, ".xlsx");

    ensure_parent_dir(&exam_path)?;
    std::fs::write(&exam_path, render_text(exam))
        .with_context(|| format!("write {}", exam_path.display()))?;
    write_answer_key(answers, &key_path)?;

    tracing::debug!(
        exam = %exam_path.display(),
        answer_key = %key_path.display(),
        "wrote plain-text exam"
    );

    Ok(TextExamPaths {
        exam: exam_path,
        answer_key: key_path,
    })
}
