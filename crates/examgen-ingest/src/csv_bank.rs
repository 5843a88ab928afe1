use std::path::Path;

use csv::ReaderBuilder;

use examgen_model::ItemBank;

use crate::error::{IngestError, Result};
use crate::rows::{bank_from_rows, normalize_cell};

/// Read an item bank from a headerless CSV file.
pub fn read_csv_bank(path: &Path) -> Result<ItemBank> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        raw_rows.push(record.iter().map(normalize_cell).collect());
    }

    tracing::debug!(path = %path.display(), rows = raw_rows.len(), "read csv item bank");
    bank_from_rows(raw_rows)
}
