use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::record::RawRow;
use crate::infra::import::build_raw_row;

pub fn read_delimited_rows(path: &Path) -> Result<Vec<RawRow>> {
    let delimiter = detect_delimiter(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", path.display()))?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_string())
        .collect();

    if headers.iter().all(|header| header.is_empty()) {
        anyhow::bail!("csv header is required")
    }

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("failed to parse csv record {}", row_idx + 1))?;
        let row = build_raw_row(&headers, record.iter());
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(rows)
}

fn detect_delimiter(path: &Path) -> Result<u8> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "tsv" => Ok(b'\t'),
        "txt" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open text file: {}", path.display()))?;
            let mut first_line = String::new();
            BufReader::new(file)
                .read_line(&mut first_line)
                .with_context(|| format!("failed to read header line: {}", path.display()))?;
            if first_line.contains('\t') && !first_line.contains(',') {
                Ok(b'\t')
            } else {
                Ok(b',')
            }
        }
        _ => Ok(b','),
    }
}
