/// Error types for dataset loading and configuration.
///
/// The view engine itself has no failure paths; these errors only come from
/// reading the dataset file and from parsing server settings.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to retrieve or parse the dataset document
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Invalid server configuration value
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}
