//! Build errors for state registries.

use thiserror::Error;

/// Errors that can occur when building a state registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("State '{state}' registered twice")]
    DuplicateState { state: &'static str },

    #[error("No behaviour for state '{state}'. Call .state() or .placeholder() before .build()")]
    MissingState { state: &'static str },

    #[error("State '{state}' reports index {index} but sits at slot {slot} of StateId::ALL")]
    InconsistentIndex {
        state: &'static str,
        index: usize,
        slot: usize,
    },
}
