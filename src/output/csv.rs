//! CSV output of container contents.

use crate::container::MemoryContainer;
use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};

use super::terminal::format_field;

/// File name written by [`write_csv`].
pub const RANGES_CSV: &str = "ranges.csv";

/// Per-group counts shown by [`print_summary`].
#[derive(Debug, PartialEq, Eq)]
pub struct SummaryRow {
    pub group: String,
    pub v4_ranges: usize,
    pub v6_ranges: usize,
    pub cidrs: usize,
}

/// One summary row per group, in group key order.
pub fn summary_rows(container: &MemoryContainer) -> Vec<SummaryRow> {
    container
        .groups()
        .map(|(name, group)| SummaryRow {
            group: name.to_string(),
            v4_ranges: group.v4.len(),
            v6_ranges: group.v6.len(),
            cidrs: group.cidrs().len(),
        })
        .collect()
}

fn format_summary_row(row: &SummaryRow) -> String {
    format!(
        "{group},{v4},{v6},{cidrs}",
        group = format_field(&row.group, 8),
        v4 = format_field(row.v4_ranges, 10),
        v6 = format_field(row.v6_ranges, 10),
        cidrs = format_field(row.cidrs, 10),
    )
}

/// Print a CSV summary of the container to stdout.
pub fn print_summary(container: &MemoryContainer) {
    log::info!("# Got group count = {}", container.len());
    println!(r#" "group",  "v4_ranges",  "v6_ranges",    "cidrs""#);
    for row in summary_rows(container) {
        println!("{}", format_summary_row(&row));
    }
}

/// Write every merged range as `group,start,end` into `<dir>/ranges.csv`.
///
/// # Returns
/// * `Ok(PathBuf)` - path of the written file
pub fn write_csv(container: &MemoryContainer, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(RANGES_CSV);
    let output_err = |source: std::io::Error| ConvertError::Output {
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(output_err)?;
    let mut writer = csv::Writer::from_path(&path).map_err(|e| output_err(e.into()))?;
    writer
        .write_record(["group", "start", "end"])
        .map_err(|e| output_err(e.into()))?;
    for (name, group) in container.groups() {
        for range in group.iter() {
            writer
                .write_record([
                    name.to_string(),
                    range.start().to_string(),
                    range.end().to_string(),
                ])
                .map_err(|e| output_err(e.into()))?;
        }
    }
    writer.flush().map_err(output_err)?;

    log::info!("Wrote {}", path.display());
    Ok(path)
}
