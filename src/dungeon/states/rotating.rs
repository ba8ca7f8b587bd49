use super::{DungeonPlayerStateId, DungeonTransition, PlayerHost, RotationParams};
use crate::core::{State, Transition};
use glam::Quat;
use tracing::{debug, trace, warn};

/// Seconds a quarter turn takes.
pub const ROTATION_DURATION: f32 = 0.3;

/// Distance from `t == 1` at which a turn counts as finished.
pub const COMPLETION_EPSILON: f32 = 1e-7;

/// Turning the camera between two orientations.
///
/// The orientations come from the [`RotationParams`] of the transition that
/// entered this state. The turn runs for the full duration and cannot be
/// interrupted: no input is read until it is done, after which the state
/// hands back to [`DungeonPlayerStateId::Default`].
#[derive(Clone, Debug)]
pub struct RotatingState {
    duration: f32,
    epsilon: f32,
    original: Quat,
    target: Quat,
    // f64 so that frame deltas adding up to the duration finish the turn
    elapsed: f64,
    done: bool,
}

impl Default for RotatingState {
    fn default() -> Self {
        Self::new()
    }
}

impl RotatingState {
    pub fn new() -> Self {
        Self::with_timing(ROTATION_DURATION, COMPLETION_EPSILON)
    }

    pub fn with_timing(duration: f32, epsilon: f32) -> Self {
        Self {
            duration,
            epsilon,
            original: Quat::IDENTITY,
            target: Quat::IDENTITY,
            elapsed: 0.0,
            done: false,
        }
    }

    pub fn original(&self) -> Quat {
        self.original
    }

    pub fn target(&self) -> Quat {
        self.target
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Interpolation parameter for `elapsed`, clamped to [0, 1].
    ///
    /// A duration that is not a positive number completes at once.
    fn progress(&self) -> f64 {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return 1.0;
        }
        (self.elapsed / f64::from(self.duration)).clamp(0.0, 1.0)
    }

    fn is_finished(&self, t: f64) -> bool {
        t >= 1.0 || 1.0 - t < f64::from(self.epsilon)
    }
}

impl<H: PlayerHost + ?Sized> State<H> for RotatingState {
    type Id = DungeonPlayerStateId;
    type Params = RotationParams;

    fn handle_input(&mut self, _host: &H, _delta: f32) -> Option<DungeonTransition> {
        self.done
            .then(|| Transition::new(DungeonPlayerStateId::Default))
    }

    fn tick(&mut self, host: &mut H, delta: f32) {
        if self.done {
            return;
        }

        if delta.is_finite() {
            self.elapsed += f64::from(delta);
        } else {
            warn!(delta, "ignoring non-finite frame delta");
        }
        let t = self.progress();
        let finished = self.is_finished(t);

        let rotation = if finished {
            self.target
        } else {
            self.original.slerp(self.target, t as f32)
        };
        host.set_rotation(rotation);
        trace!(t, elapsed = self.elapsed, "rotating");

        if finished {
            self.elapsed = 0.0;
            self.done = true;
            debug!("rotation complete");
        }
    }

    fn enter(&mut self, params: Option<RotationParams>) {
        self.elapsed = 0.0;
        self.done = false;
        match params {
            Some(RotationParams { original, target }) => {
                self.original = original;
                self.target = target;
            }
            None => warn!("entered rotation without orientations, reusing the previous pair"),
        }
    }
}
