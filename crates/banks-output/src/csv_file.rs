//! CSV sink.

use std::path::Path;

use banks_model::{BankRecord, Dataset, RECORD_FIELDS};
use tracing::debug;

use crate::error::{OutputError, Result};

/// Write `dataset` to `path`, replacing any existing file.
///
/// The header row is always written, so an empty dataset produces a
/// header-only file. Floats use the shortest representation that reads back
/// to the same value.
pub fn save_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| OutputError::csv(path, e))?;

    writer
        .write_record(RECORD_FIELDS)
        .map_err(|e| OutputError::csv(path, e))?;
    for record in dataset {
        writer
            .serialize(record)
            .map_err(|e| OutputError::csv(path, e))?;
    }
    writer.flush().map_err(|e| OutputError::io(path, e))?;

    debug!(path = %path.display(), rows = dataset.len(), "csv written");
    Ok(())
}

/// Read a file written by [`save_csv`] back into a dataset.
pub fn read_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| OutputError::csv(path, e))?;

    let records = reader
        .deserialize::<BankRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| OutputError::csv(path, e))?;
    Ok(Dataset::new(records))
}
