//! Item-bank loading.
//!
//! The bank is a headerless table: column 0 holds the question text, the
//! remaining columns hold the answer options with their inline markup.
//! [`read_item_bank`] picks the adapter from the file extension; the CSV and
//! XLSX adapters are also exported directly.

mod csv_bank;
mod error;
mod rows;
mod xlsx_bank;

use std::path::Path;

use examgen_model::ItemBank;

pub use csv_bank::read_csv_bank;
pub use error::{IngestError, Result};
pub use rows::bank_from_rows;
pub use xlsx_bank::read_xlsx_bank;

/// Read an item bank, dispatching on the file extension.
///
/// `.csv` and `.xlsx`/`.xlsm` are supported; anything else is an
/// [`IngestError::UnsupportedFormat`].
pub fn read_item_bank(path: impl AsRef<Path>) -> Result<ItemBank> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") => read_csv_bank(path),
        Some("xlsx" | "xlsm") => read_xlsx_bank(path),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
