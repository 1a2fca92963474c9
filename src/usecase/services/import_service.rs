use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::domain::entities::record::DomainRecord;
use crate::infra::import::read_rows;

/// Turns a spreadsheet or delimited file into new records. Persisting the
/// batch is left to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    pub fn import(&self, path: &Path) -> Result<Vec<DomainRecord>> {
        let rows = read_rows(path)?;
        let records: Vec<DomainRecord> = rows.iter().map(DomainRecord::from_raw_row).collect();
        info!(path = %path.display(), rows = records.len(), "decoded import file");
        Ok(records)
    }
}
