use std::path::Path;

use anyhow::{bail, Result};

use crate::domain::entities::record::RawRow;

pub mod csv;
pub mod xlsx;

pub const DELIMITED_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Decodes the first table of `path` into header-keyed rows, picking the
/// reader by file extension.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    if DELIMITED_EXTENSIONS.contains(&ext.as_str()) {
        self::csv::read_delimited_rows(path)
    } else if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
        self::xlsx::read_first_sheet_rows(path)
    } else {
        bail!("unsupported file type: {}", path.display())
    }
}

/// Zips a header row with one data row. Blank headers and empty cells are
/// dropped so a missing value looks the same as a missing column.
pub(crate) fn build_raw_row<'a>(
    headers: &[String],
    cells: impl IntoIterator<Item = &'a str>,
) -> RawRow {
    headers
        .iter()
        .zip(cells)
        .filter(|(header, value)| !header.trim().is_empty() && !value.trim().is_empty())
        .map(|(header, value)| (header.clone(), value.to_string()))
        .collect()
}
