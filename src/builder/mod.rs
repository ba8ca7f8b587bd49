//! Builder API for state machine construction.
//!
//! This module provides the fluent registry builder and the `state_id!` macro
//! for declaring identifier enums with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod registry;

pub use error::BuildError;
pub use registry::StateRegistryBuilder;
