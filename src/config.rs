//! Job configuration: which converters to run and where to write results.

use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file used when neither the command line nor the environment names one.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
/// Environment variable holding the config file path.
pub const CONFIG_ENV: &str = "IPINFO_CSV_CONFIG";

/// A job: inputs run in order against one container, then optional output.
#[derive(Deserialize, Debug)]
pub struct Config {
    pub input: Vec<InputConfig>,
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// One converter invocation.
#[derive(Deserialize, Debug)]
pub struct InputConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub action: String,
    #[serde(default)]
    pub args: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
pub struct OutputConfig {
    pub dir: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `<group>.txt` file of CIDR prefixes per group.
    #[default]
    Text,
    /// A single `ranges.csv` of `group,start,end` rows.
    Csv,
    /// A single `groups.json` of merged ranges per group.
    Json,
}

/// Decode a job config from JSON text.
pub fn parse_config(json: &str) -> Result<Config> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let config: Config =
        serde_path_to_error::deserialize(&mut deserializer).map_err(ConvertError::from_json_path)?;
    if config.input.is_empty() {
        return Err(ConvertError::Config("no input configured".to_string()));
    }
    Ok(config)
}

/// Read and decode a job config file.
pub fn read_config(path: &Path) -> Result<Config> {
    log::info!("Reading config file: {}", path.display());
    let json = std::fs::read_to_string(path).map_err(|source| ConvertError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&json)
}
