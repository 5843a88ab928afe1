use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};

use examgen_model::ItemBank;

use crate::error::{IngestError, Result};
use crate::rows::{bank_from_rows, normalize_cell};

/// Render a worksheet cell the way it would print, not the way Excel
/// stores it: integral floats lose the ".0" so a cell typed as the number
/// 4 comes back as "4".
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Float(value) if value.fract() == 0.0 => format!("{}", *value as i64),
        other => normalize_cell(&other.to_string()),
    }
}

/// Read an item bank from the first worksheet of an XLSX workbook.
pub fn read_xlsx_bank(path: &Path) -> Result<ItemBank> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|source| IngestError::Xlsx {
            path: path.to_path_buf(),
            source,
        })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::MissingWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|source| IngestError::Xlsx {
            path: path.to_path_buf(),
            source,
        })?;

    let raw_rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    tracing::debug!(path = %path.display(), rows = raw_rows.len(), "read xlsx item bank");
    bank_from_rows(raw_rows)
}
