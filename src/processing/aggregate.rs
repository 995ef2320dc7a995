//! Aggregation of CSV rows into per-group entries.

use super::{classify, WantSet};
use crate::error::{ConvertError, Result};
use crate::models::Entry;
use crate::source::Row;
use csv::StringRecord;
use std::collections::HashMap;

/// Group the data rows of `records` into one [`Entry`] per group key.
///
/// The first record is the header and is always skipped. Rows whose group is
/// not in `want` are dropped. The first short row or invalid range aborts the
/// whole aggregation.
///
/// # Arguments
/// * `records` - all records of the source, header included
/// * `want` - group keys to keep, empty keeps all
///
/// # Returns
/// * `Ok(HashMap)` - entries keyed by group key
/// * `Err` - on the first row that cannot be used
pub fn aggregate(records: &[StringRecord], want: &WantSet) -> Result<HashMap<String, Entry>> {
    let mut entries: HashMap<String, Entry> = HashMap::new();
    let mut skipped = 0usize;

    for (i, record) in records.iter().enumerate().skip(1) {
        let row = Row::from_record(record, i + 1)?;
        let group = classify(&row.country, &row.continent);

        if !want.accepts(&group) {
            skipped += 1;
            continue;
        }

        log::trace!("row {}: {} -> {group}", i + 1, row.country);
        entries
            .entry(group)
            .or_insert_with_key(|key| Entry::new(key))
            .add_range(&row.start, &row.end)
            .map_err(|reason| ConvertError::Range {
                start: row.start.clone(),
                end: row.end.clone(),
                reason,
            })?;
    }

    log::debug!(
        "Aggregated {} rows into {} groups, skipped {skipped} unwanted rows",
        records.len().saturating_sub(1),
        entries.len()
    );
    Ok(entries)
}
