//! First-person dungeon player: input and transform boundaries, the player
//! states and the controller that runs them.

pub mod controller;
pub mod error;
pub mod input;
pub mod spatial;
pub mod states;

pub use controller::DungeonPlayerController;
pub use error::ControllerError;
pub use input::{Action, InputEvent, InputSource, InputState, KeyBindings};
pub use spatial::{yaw_rotated, Spatial, Transform, QUARTER_TURN};
pub use states::{
    DefaultState, DungeonPlayerStateId, DungeonTransition, PlayerHost, RotatingState,
    RotationParams, COMPLETION_EPSILON, ROTATION_DURATION,
};

use glam::{Quat, Vec3};

/// Self-contained player host: a [`Transform`] driven by an [`InputState`].
#[derive(Debug, Clone, Default)]
pub struct DungeonPlayer {
    pub transform: Transform,
    pub input: InputState,
}

impl DungeonPlayer {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            transform: Transform::default(),
            input: InputState::new(bindings),
        }
    }
}

impl InputSource for DungeonPlayer {
    fn is_action_just_pressed(&self, action: Action) -> bool {
        self.input.is_action_just_pressed(action)
    }
}

impl Spatial for DungeonPlayer {
    fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }

    fn translation(&self) -> Vec3 {
        self.transform.translation
    }

    fn set_translation(&mut self, translation: Vec3) {
        self.transform.translation = translation;
    }
}
