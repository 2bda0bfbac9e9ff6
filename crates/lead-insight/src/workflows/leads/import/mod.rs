mod normalizer;
mod parser;

use crate::workflows::leads::domain::LeadRecord;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum LeadImportError {
    #[error("failed to read lead export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid lead CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads CRM lead exports into [`LeadRecord`]s, one per data row.
pub struct LeadCsvImporter;

impl LeadCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LeadRecord>, LeadImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<LeadRecord>, LeadImportError> {
        let records = parser::parse_records(reader)?;
        info!(rows = records.len(), "imported lead export");
        Ok(records)
    }
}
