//! Transform boundary of the dungeon player.

use glam::{Quat, Vec3};

/// A quarter turn, in radians.
pub const QUARTER_TURN: f32 = std::f32::consts::FRAC_PI_2;

/// Orientation and position of a controlled entity.
pub trait Spatial {
    fn rotation(&self) -> Quat;

    fn set_rotation(&mut self, rotation: Quat);

    fn translation(&self) -> Vec3;

    fn set_translation(&mut self, translation: Vec3);
}

/// Plain rigid transform, for hosts that do not bring their own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Default::default()
        }
    }

    /// Direction the entity looks at (local -Z).
    pub fn facing(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

impl Spatial for Transform {
    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn translation(&self) -> Vec3 {
        self.translation
    }

    fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }
}

/// `rotation` turned by `angle` radians about the world vertical axis.
/// Positive angles turn left.
pub fn yaw_rotated(rotation: Quat, angle: f32) -> Quat {
    (Quat::from_rotation_y(angle) * rotation).normalize()
}
