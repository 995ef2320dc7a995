//! Error type shared by the converter, registry and driver.

use std::path::PathBuf;
use thiserror::Error;

/// Why a start/end address pair was refused by an [`crate::models::Entry`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid IP address '{0}'")]
    InvalidAddress(String),

    #[error("range mixes IPv4 and IPv6")]
    FamilyMismatch,

    #[error("start address is after end address")]
    Reversed,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid configuration at '{path}': {source}")]
    ConfigJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open source file '{path}': {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse source file '{path}': {source}")]
    SourceParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Row {line} has {found} fields, need at least {need}")]
    ShortRow {
        line: usize,
        found: usize,
        need: usize,
    },

    #[error("Invalid range {start} - {end}: {reason}")]
    Range {
        start: String,
        end: String,
        #[source]
        reason: RangeError,
    },

    #[error("Container rejected entry '{name}': {source}")]
    Container {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Unknown action '{0}'")]
    UnknownAction(String),

    #[error("Unknown converter type '{0}'")]
    UnknownConverter(String),

    #[error("Converter type '{0}' is already registered")]
    DuplicateConverter(String),

    #[error("Failed to write output '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Wrap a path-aware JSON decoding failure.
    pub fn from_json_path(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        ConvertError::ConfigJson {
            path: err.path().to_string(),
            source: err.into_inner(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_message() {
        let err = ConvertError::Range {
            start: "1.0.0.x".to_string(),
            end: "1.0.0.255".to_string(),
            reason: RangeError::InvalidAddress("1.0.0.x".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Invalid range 1.0.0.x - 1.0.0.255: invalid IP address '1.0.0.x'"
        );
    }

    #[test]
    fn test_json_path_is_kept() {
        #[derive(serde::Deserialize, Debug)]
        struct Args {
            #[allow(dead_code)]
            file: String,
        }
        let mut de = serde_json::Deserializer::from_str(r#"{"file": 42}"#);
        let err = serde_path_to_error::deserialize::<_, Args>(&mut de).unwrap_err();
        match ConvertError::from_json_path(err) {
            ConvertError::ConfigJson { path, .. } => assert_eq!(path, "file"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
