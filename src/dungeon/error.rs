//! Controller construction errors.

use crate::builder::BuildError;
use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a dungeon player controller
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The controller settings were rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The state registry could not be assembled
    #[error(transparent)]
    Build(#[from] BuildError),
}
