//! Delve: a frame-stepped state machine for first-person dungeon crawlers
//!
//! The player of a grid-based dungeon crawler is always in exactly one
//! behavioural state. Once per frame the host loop ticks the controller: the
//! current state reads input and may hand over to another state, then the
//! current state advances its own behaviour.
//!
//! # Core Concepts
//!
//! - **StateId**: Closed set of state identifiers, declared with [`state_id!`]
//! - **State**: Behaviour per state, returning a [`Transition`](core::Transition)
//!   that carries its parameters to the next state
//! - **StateMachine**: Runs the states against a host and records history
//! - **DungeonPlayerController**: The dungeon player's states wired together
//!
//! # Example
//!
//! ```rust
//! use delve::dungeon::{Action, DungeonPlayer, DungeonPlayerController, DungeonPlayerStateId};
//!
//! let mut player = DungeonPlayer::default();
//! let mut controller: DungeonPlayerController<DungeonPlayer> =
//!     DungeonPlayerController::with_defaults().unwrap();
//!
//! player.input.press(Action::Left);
//! controller.tick(&mut player, 0.1);
//! player.input.end_frame();
//! assert_eq!(controller.current_state(), DungeonPlayerStateId::Rotating);
//!
//! controller.tick(&mut player, 0.1);
//! controller.tick(&mut player, 0.1);
//! controller.tick(&mut player, 0.1);
//! assert_eq!(controller.current_state(), DungeonPlayerStateId::Default);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod dungeon;
pub mod logging;

// Re-export commonly used types
pub use builder::{BuildError, StateRegistryBuilder};
pub use config::{ConfigError, ControllerConfig, DelveConfig};
pub use crate::core::{State, StateHistory, StateId, StateMachine, StateRegistry, StateTransition, Transition};
pub use dungeon::{ControllerError, DungeonPlayer, DungeonPlayerController, DungeonPlayerStateId};
