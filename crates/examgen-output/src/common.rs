//! Shared path and package helpers for the output writers.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Create the parent directory of an output path if it is missing.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Append a version suffix to the base file name (`exam`, 2 → `exam2`).
pub fn versioned_base(base: &Path, version: u32) -> PathBuf {
    with_suffix(base, &version.to_string())
}

/// Append a literal suffix to the file name.
///
/// Unlike `Path::with_extension` this never eats part of a dotted base
/// name (`my.exam` + `.txt` → `my.exam.txt`).
pub fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = base
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(suffix);
    base.with_file_name(name)
}

/// Add one part to an OOXML package.
pub(crate) fn write_part<W: Write + std::io::Seek>(
    archive: &mut ZipWriter<W>,
    name: &str,
    contents: &[u8],
) -> Result<()> {
    archive
        .start_file(name, SimpleFileOptions::default())
        .with_context(|| format!("add package part {name}"))?;
    archive
        .write_all(contents)
        .with_context(|| format!("write package part {name}"))?;
    Ok(())
}
