//! Plain text CIDR lists, one file per group.

use crate::container::MemoryContainer;
use crate::error::{ConvertError, Result};
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// File name for a group: lowercased key, `unknown` for an empty key.
pub fn group_file_name(group: &str) -> String {
    let stem: String = group
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "unknown.txt".to_string()
    } else {
        format!("{stem}.txt")
    }
}

/// Write `<dir>/<group>.txt` with one CIDR prefix per line for every group.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - written files in group key order
pub fn write_text(container: &MemoryContainer, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|source| ConvertError::Output {
        path: dir.to_path_buf(),
        source,
    })?;

    let generated = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let mut written = Vec::with_capacity(container.len());
    for (name, group) in container.groups() {
        let path = dir.join(group_file_name(name));
        let body = group.cidrs().iter().join("\n");
        let text = format!("# {name} generated {generated}\n{body}\n");
        std::fs::write(&path, text).map_err(|source| ConvertError::Output {
            path: path.clone(),
            source,
        })?;
        log::debug!("Wrote {}", path.display());
        written.push(path);
    }

    log::info!("Wrote {} group files to {}", written.len(), dir.display());
    Ok(written)
}
