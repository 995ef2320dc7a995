//! A normalized data row of the ipinfo country CSV.

use crate::error::{ConvertError, Result};
use csv::StringRecord;

/// Number of leading fields every data row must carry.
pub const ROW_FIELDS: usize = 5;

const FIELD_START: usize = 0;
const FIELD_END: usize = 1;
const FIELD_COUNTRY: usize = 2;
const FIELD_CONTINENT: usize = 4;

/// One data row with its fields normalized.
///
/// Addresses are trimmed and lowercased, codes are trimmed and uppercased.
/// Field 3 (country name / region) is not used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub start: String,
    pub end: String,
    pub country: String,
    pub continent: String,
}

impl Row {
    /// Build a row from a raw record.
    ///
    /// `line` is the 1-based position of the record in the source and is only
    /// used for error reporting.
    pub fn from_record(record: &StringRecord, line: usize) -> Result<Row> {
        if record.len() < ROW_FIELDS {
            return Err(ConvertError::ShortRow {
                line,
                found: record.len(),
                need: ROW_FIELDS,
            });
        }
        Ok(Row {
            start: record[FIELD_START].trim().to_lowercase(),
            end: record[FIELD_END].trim().to_lowercase(),
            country: record[FIELD_COUNTRY].trim().to_uppercase(),
            continent: record[FIELD_CONTINENT].trim().to_uppercase(),
        })
    }
}
