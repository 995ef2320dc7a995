//! JSON dump of container contents.

use crate::container::MemoryContainer;
use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};

/// File name written by [`write_json`].
pub const GROUPS_JSON: &str = "groups.json";

/// Write the merged ranges of every group into `<dir>/groups.json`.
///
/// Layout: `{"groups": {"<key>": {"v4": ["start-end", ...], "v6": [...]}}}`.
pub fn write_json(container: &MemoryContainer, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(GROUPS_JSON);
    let output_err = |source: std::io::Error| ConvertError::Output {
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(output_err)?;
    let json = serde_json::to_string_pretty(container).map_err(|e| output_err(e.into()))?;
    std::fs::write(&path, json).map_err(output_err)?;

    log::info!("Wrote {}", path.display());
    Ok(path)
}
