use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;

use crate::domain::entities::record::RawRow;
use crate::infra::import::build_raw_row;

pub fn read_first_sheet_rows(path: &Path) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("failed to open workbook: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("workbook has no sheets: {}", path.display()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let mut sheet_rows = range.rows();
    let Some(header_row) = sheet_rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_row.iter().map(cell_to_string).collect();

    let rows = sheet_rows
        .map(|row| {
            let cells: Vec<String> = row.iter().map(cell_to_string).collect();
            build_raw_row(&headers, cells.iter().map(String::as_str))
        })
        .filter(|row| !row.is_empty())
        .collect();

    Ok(rows)
}

/// Renders one cell the way a person would type it. Date-formatted numbers
/// become `YYYY-MM-DD` in the workbook's own date system.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) if v.is_datetime() => v
            .as_datetime()
            .map(|value| value.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| v.as_f64().to_string()),
        Data::DateTime(v) => v.as_f64().to_string(),
        Data::DateTimeIso(v) => iso_date_part(v),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

fn iso_date_part(value: &str) -> String {
    value
        .get(..10)
        .filter(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").is_ok())
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}
