//! Behavioural states of the dungeon player.

mod default;
mod rotating;

pub use default::DefaultState;
pub use rotating::{RotatingState, COMPLETION_EPSILON, ROTATION_DURATION};

use crate::core::Transition;
use crate::dungeon::input::InputSource;
use crate::dungeon::spatial::Spatial;
use crate::state_id;
use glam::Quat;

state_id! {
    /// Behavioural modes of the dungeon player.
    pub enum DungeonPlayerStateId {
        /// Standing still
        Default,
        /// Moving from one tile to the next
        Walking,
        /// Moving quickly, camera locked
        Running,
        /// Turning the camera a quarter turn
        Rotating,
        /// Scanning the surroundings
        Scanning,
    }
}

impl DungeonPlayerStateId {
    /// Whether the state has behaviour of its own. Others run as Default.
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Default | Self::Rotating)
    }
}

/// Orientation pair handed to [`RotatingState`] when it is entered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationParams {
    pub original: Quat,
    pub target: Quat,
}

pub type DungeonTransition = Transition<DungeonPlayerStateId, RotationParams>;

/// Everything a dungeon player state needs from its host.
pub trait PlayerHost: InputSource + Spatial {}

impl<T: InputSource + Spatial + ?Sized> PlayerHost for T {}
