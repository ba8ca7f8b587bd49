//! Core state machine types and logic.
//!
//! This module contains the generic, host-agnostic state machine:
//! - State identifiers via the `StateId` trait
//! - State behaviour via the `State` trait and the `Transition` it returns
//! - The `StateRegistry` holding one behaviour per identifier
//! - The frame-stepped `StateMachine` and its transition history

mod history;
mod id;
mod machine;
mod registry;
mod state;

pub use history::{StateHistory, StateTransition};
pub use id::StateId;
pub use machine::StateMachine;
pub use registry::StateRegistry;
pub use state::{BoxedState, State, Transition};
