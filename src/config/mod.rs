//! Runtime configuration for the dungeon player.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration. Loaded values are validated before use.

pub mod error;

pub use error::ConfigError;

use crate::dungeon::input::KeyBindings;
use crate::dungeon::states::{COMPLETION_EPSILON, ROTATION_DURATION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Complete Delve configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelveConfig {
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub bindings: KeyBindings,
}

/// Timing and bookkeeping of the player controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Seconds a quarter turn takes
    #[serde(default = "default_rotation_duration")]
    pub rotation_duration: f32,
    /// Distance from the end of a turn at which it counts as finished
    #[serde(default = "default_completion_epsilon")]
    pub completion_epsilon: f32,
    /// Transitions kept in the controller's history
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_rotation_duration() -> f32 {
    ROTATION_DURATION
}

fn default_completion_epsilon() -> f32 {
    COMPLETION_EPSILON
}

fn default_history_limit() -> usize {
    64
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            rotation_duration: default_rotation_duration(),
            completion_epsilon: default_completion_epsilon(),
            history_limit: default_history_limit(),
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.rotation_duration.is_finite() || self.rotation_duration <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "controller.rotation_duration",
                reason: format!("must be a positive number, got {}", self.rotation_duration),
            });
        }
        if !self.completion_epsilon.is_finite() || self.completion_epsilon < 0.0 {
            return Err(ConfigError::Invalid {
                field: "controller.completion_epsilon",
                reason: format!(
                    "must be a non-negative number, got {}",
                    self.completion_epsilon
                ),
            });
        }
        Ok(())
    }
}

impl DelveConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the JSON configuration at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.controller.validate()?;
        if let Some(key) = self.bindings.conflicting_key() {
            return Err(ConfigError::Invalid {
                field: "bindings",
                reason: format!("key '{key}' is bound to more than one action"),
            });
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
