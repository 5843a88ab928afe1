use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

use examgen_model::ShuffleOptions;
use examgen_output::{DEFAULT_FONT, DocumentOptions, render_text, versioned_base, with_suffix};

/// One batch of exam variants to generate from an item bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Item-bank spreadsheet (`.csv`, `.xlsx`, `.xlsm`).
    pub input: PathBuf,
    /// Directory receiving every artifact.
    pub output_dir: PathBuf,
    /// Base file name for all artifacts; the version number is appended.
    pub output_name: String,
    /// How many independent variants to generate.
    pub versions: u32,
    /// Shuffling policy shared by all variants.
    pub shuffle: ShuffleOptions,
    /// Font family for the document output.
    pub font: String,
    /// Optional template `.docx` supplying document styles.
    pub template: Option<PathBuf>,
    /// Also write each variant as plain text.
    pub emit_text: bool,
}

impl GenerateRequest {
    pub fn new(
        input: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        output_name: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            output_name: output_name.into(),
            versions: 1,
            shuffle: ShuffleOptions::default(),
            font: DEFAULT_FONT.to_string(),
            template: None,
            emit_text: false,
        }
    }

    pub fn with_versions(mut self, versions: u32) -> Self {
        self.versions = versions;
        self
    }

    pub fn with_shuffle(mut self, shuffle: ShuffleOptions) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_text(mut self, emit_text: bool) -> Self {
        self.emit_text = emit_text;
        self
    }
}

/// Artifacts written for one exam variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionResult {
    pub version: u32,
    pub document: PathBuf,
    pub answer_key: PathBuf,
    pub text: Option<PathBuf>,
    pub items: usize,
}

/// Everything written for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub versions: Vec<VersionResult>,
}

/// Generate all requested exam variants using the process RNG.
pub fn generate_exams(request: &GenerateRequest) -> Result<GenerateResponse> {
    generate_exams_with(request, &mut rand::rng())
}

/// Generate all requested exam variants with an injected RNG.
///
/// The bank is loaded once; every version shuffles its own copy, so the
/// variants are independent draws.
pub fn generate_exams_with<R: Rng + ?Sized>(
    request: &GenerateRequest,
    rng: &mut R,
) -> Result<GenerateResponse> {
    let bank = examgen_ingest::read_item_bank(&request.input)
        .with_context(|| format!("load item bank {}", request.input.display()))?;
    tracing::info!(
        input = %request.input.display(),
        items = bank.len(),
        versions = request.versions,
        "generating exam variants"
    );

    let document_options = match &request.template {
        Some(template) => DocumentOptions::new()
            .with_font(&request.font)
            .with_template(template),
        None => DocumentOptions::new().with_font(&request.font),
    };
    let base = request.output_dir.join(&request.output_name);

    let mut versions = Vec::with_capacity(request.versions as usize);
    for version in 1..=request.versions {
        let (exam, key) = examgen_shuffle::generate_with(bank.clone(), &request.shuffle, rng)
            .with_context(|| format!("shuffle version {version}"))?;

        let paths =
            examgen_output::write_document_exam(&exam, &key, &base, version, &document_options)
                .with_context(|| format!("write version {version}"))?;

        let text = if request.emit_text {
            let text_path = with_suffix(&versioned_base(&base, version), ".txt");
            examgen_output::ensure_parent_dir(&text_path)?;
            std::fs::write(&text_path, render_text(&exam))
                .with_context(|| format!("write {}", text_path.display()))?;
            Some(text_path)
        } else {
            None
        };

        versions.push(VersionResult {
            version,
            document: paths.document,
            answer_key: paths.answer_key,
            text,
            items: exam.len(),
        });
    }

    Ok(GenerateResponse {
        input: request.input.clone(),
        output_dir: request.output_dir.clone(),
        versions,
    })
}
