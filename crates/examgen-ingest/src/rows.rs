//! Raw-row handling shared by the format adapters.

use examgen_model::{Item, ItemBank};

use crate::error::Result;

/// Strip surrounding whitespace and a UTF-8 BOM from a cell.
pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Build an [`ItemBank`] from raw spreadsheet rows.
///
/// Column 0 is the question, the rest are options. Fully empty rows are
/// skipped and fully empty trailing cells are dropped per row; the remaining
/// rows must be rectangular.
pub fn bank_from_rows(raw_rows: Vec<Vec<String>>) -> Result<ItemBank> {
    let mut items = Vec::new();
    for mut row in raw_rows {
        while row.last().is_some_and(|cell| cell.is_empty()) {
            row.pop();
        }
        if row.is_empty() {
            continue;
        }
        let mut cells = row.into_iter();
        let question = cells.next().unwrap_or_default();
        items.push(Item::new(question, cells.collect()));
    }
    Ok(ItemBank::try_new(items)?)
}
