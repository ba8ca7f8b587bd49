//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the controller cannot run with
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}
