use super::{DungeonPlayerStateId, DungeonTransition, PlayerHost, RotationParams};
use crate::core::{State, Transition};
use crate::dungeon::input::Action;
use crate::dungeon::spatial::{yaw_rotated, QUARTER_TURN};
use tracing::debug;

/// Standing still, waiting for a turn.
///
/// Also stands in for states that have no behaviour yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultState;

impl DefaultState {
    fn turn<H: PlayerHost + ?Sized>(host: &H, angle: f32) -> DungeonTransition {
        let original = host.rotation();
        Transition::with_params(
            DungeonPlayerStateId::Rotating,
            RotationParams {
                original,
                target: yaw_rotated(original, angle),
            },
        )
    }
}

impl<H: PlayerHost + ?Sized> State<H> for DefaultState {
    type Id = DungeonPlayerStateId;
    type Params = RotationParams;

    // left wins when both fire on the same frame
    fn handle_input(&mut self, host: &H, _delta: f32) -> Option<DungeonTransition> {
        if host.is_action_just_pressed(Action::Left) {
            debug!("turning left");
            return Some(Self::turn(host, QUARTER_TURN));
        }
        if host.is_action_just_pressed(Action::Right) {
            debug!("turning right");
            return Some(Self::turn(host, -QUARTER_TURN));
        }
        None
    }

    fn tick(&mut self, _host: &mut H, _delta: f32) {}
}
