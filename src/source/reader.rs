//! Whole-file CSV reading.

use crate::error::{ConvertError, Result};
use csv::StringRecord;
use std::fs::File;
use std::path::Path;

/// Read every record of a CSV file into memory.
///
/// The first record is returned like any other; callers decide what to do
/// with the header. All records must have the same number of fields. A `"`
/// inside an unquoted field is kept as a literal character.
///
/// # Arguments
/// * `path` - CSV file to read
///
/// # Returns
/// * `Ok(Vec<StringRecord>)` - all records in file order
/// * `Err` - if the file cannot be opened or is not well-formed CSV
pub fn read_records(path: &Path) -> Result<Vec<StringRecord>> {
    log::info!("Reading ipinfo CSV: {}", path.display());
    let file = File::open(path).map_err(|source| ConvertError::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(file);

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|source| ConvertError::SourceParse {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}
